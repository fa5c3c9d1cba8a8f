//! Host-facing port traits.
use std::collections::BTreeMap;

use agent_core::{LocationId, MonsterId, Usable, WorldQuery};
use macro_tree::Script;

use super::Result;
use crate::providers::loadout::LoadoutSpec;

/// Decision to take for each choice adventure, keyed by choice number.
pub type ChoiceMap = BTreeMap<u32, u32>;

/// What the host reports after an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Choice adventure waiting for a decision.
    pub pending_choice: Option<u32>,
    /// Opponent the action started a fight with.
    pub encounter: Option<MonsterId>,
}

impl Outcome {
    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn encounter(monster: MonsterId) -> Self {
        Self {
            pending_choice: None,
            encounter: Some(monster),
        }
    }

    pub fn choice(choice: u32) -> Self {
        Self {
            pending_choice: Some(choice),
            encounter: None,
        }
    }
}

/// Side-effecting actions against the game.
pub trait ActionPort {
    /// Spends a turn at `location`.
    fn navigate(&mut self, location: &LocationId) -> Result<Outcome>;

    /// Uses an item or casts a skill outside of combat.
    fn use_entity(&mut self, usable: &Usable) -> Result<Outcome>;

    /// Answers a pending choice adventure.
    fn resolve_choice(&mut self, choice: u32, decision: u32) -> Result<Outcome>;
}

/// Runs a compiled combat script against the current fight.
pub trait ScriptInterpreter {
    fn execute(&mut self, script: &Script) -> Result<()>;
}

/// Puts a computed loadout on the actor.
///
/// Slots absent from the loadout keep whatever is worn.
pub trait EquipmentPort {
    fn apply(&mut self, loadout: &LoadoutSpec) -> Result<()>;
}

/// Everything a cycle needs from its surroundings.
///
/// Ports are borrowed one at a time; the engine re-reads [`Host::world`]
/// after every mutation instead of caching answers.
pub trait Host {
    fn world(&self) -> &dyn WorldQuery;
    fn actions(&mut self) -> &mut dyn ActionPort;
    fn equipment(&mut self) -> &mut dyn EquipmentPort;
    fn interpreter(&mut self) -> &mut dyn ScriptInterpreter;
}
