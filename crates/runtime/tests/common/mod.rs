//! Recording host for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use agent_core::{
    AgentError, Attribute, ItemId, LocationId, MonsterId, Result, Usable, WorldQuery, WorldSnapshot,
};
use macro_tree::Script;
use runtime::{ActionPort, EquipmentPort, Host, LoadoutSpec, Outcome, ScriptInterpreter};

/// Everything the engine asked the host to do, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Navigate(LocationId),
    Use(Usable),
    Choice(u32, u32),
    Equip(LoadoutSpec),
    Execute(String),
}

/// Host over a [`WorldSnapshot`] that spends a turn per navigation and
/// replays scripted outcomes.
pub struct RecordingHost {
    pub world: WorldSnapshot,
    pub calls: Vec<Call>,
    /// Outcomes handed out by navigate/use/resolve_choice, then nothing.
    pub outcomes: VecDeque<Outcome>,
    /// Encounter every navigation starts when no scripted outcome is left.
    pub default_encounter: Option<MonsterId>,
    /// Item every navigation drops.
    pub loot: Option<ItemId>,
    /// Usable that pushes the actor past the inebriety limit.
    pub intoxicating: Option<Usable>,
    pub fail_equipment: bool,
}

impl RecordingHost {
    pub fn new(world: WorldSnapshot) -> Self {
        Self {
            world,
            calls: Vec::new(),
            outcomes: VecDeque::new(),
            default_encounter: None,
            loot: None,
            intoxicating: None,
            fail_equipment: false,
        }
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }

    pub fn fighting(mut self, monster: MonsterId) -> Self {
        self.default_encounter = Some(monster);
        self
    }

    pub fn scripts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Execute(script) => Some(script.as_str()),
                _ => None,
            })
            .collect()
    }

    fn next_outcome(&mut self) -> Outcome {
        self.outcomes.pop_front().unwrap_or_else(|| match &self.default_encounter {
            Some(monster) => Outcome::encounter(monster.clone()),
            None => Outcome::nothing(),
        })
    }

    fn spend_turn(&mut self) {
        self.world.adjust_attribute(Attribute::Adventures, -1);
        self.world.advance_turn();
    }
}

impl ActionPort for RecordingHost {
    fn navigate(&mut self, location: &LocationId) -> Result<Outcome> {
        self.calls.push(Call::Navigate(location.clone()));
        self.spend_turn();
        if let Some(item) = self.loot.clone() {
            self.world.adjust_item(&item, 1);
        }
        Ok(self.next_outcome())
    }

    fn use_entity(&mut self, usable: &Usable) -> Result<Outcome> {
        self.calls.push(Call::Use(usable.clone()));
        if self.intoxicating.as_ref() == Some(usable) {
            let limit = self.world.attribute(Attribute::InebrietyLimit);
            self.world.set_attribute(Attribute::Inebriety, limit + 1);
        }
        Ok(self.outcomes.pop_front().unwrap_or_default())
    }

    fn resolve_choice(&mut self, choice: u32, decision: u32) -> Result<Outcome> {
        self.calls.push(Call::Choice(choice, decision));
        Ok(self.outcomes.pop_front().unwrap_or_default())
    }
}

impl EquipmentPort for RecordingHost {
    fn apply(&mut self, loadout: &LoadoutSpec) -> Result<()> {
        if self.fail_equipment {
            return Err(AgentError::action_failed("equip", "slot locked"));
        }
        loadout.ensure_possessed(&self.world)?;
        self.calls.push(Call::Equip(loadout.clone()));
        for (slot, item) in &loadout.slots {
            if self.world.equipped(*slot).as_ref() != Some(item) {
                self.world.equip(*slot, Some(item.clone()));
            }
        }
        if loadout.companion.is_some() {
            self.world.set_companion(loadout.companion.clone());
        }
        Ok(())
    }
}

impl ScriptInterpreter for RecordingHost {
    fn execute(&mut self, script: &Script) -> Result<()> {
        self.calls.push(Call::Execute(script.as_str().to_owned()));
        Ok(())
    }
}

impl Host for RecordingHost {
    fn world(&self) -> &dyn WorldQuery {
        &self.world
    }

    fn actions(&mut self) -> &mut dyn ActionPort {
        self
    }

    fn equipment(&mut self) -> &mut dyn EquipmentPort {
        self
    }

    fn interpreter(&mut self) -> &mut dyn ScriptInterpreter {
        self
    }
}

/// World with turns to spend and nothing else.
pub fn world_with_turns(adventures: i64) -> WorldSnapshot {
    WorldSnapshot::new().with_attribute(Attribute::Adventures, adventures)
}
