//! Loadout specifications.
use std::collections::{BTreeMap, BTreeSet};

use agent_core::{
    AgentError, CapabilityPort, CompanionId, Entity, ItemId, LocationId, Result, Slot, WorldQuery,
};

/// Equipment request handed to the [`EquipmentPort`](crate::api::EquipmentPort).
///
/// Also used for task overrides: whatever a task pins here is kept verbatim
/// and the optimizer only fills the remaining slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadoutSpec {
    pub slots: BTreeMap<Slot, ItemId>,
    pub companion: Option<CompanionId>,
    /// Maximizer-style modifier expressions, highest priority first.
    pub modifiers: Vec<String>,
    /// Items that must stay off.
    pub avoid: BTreeSet<ItemId>,
    /// Per-item mode settings, keyed by item name.
    pub modes: BTreeMap<String, String>,
}

impl LoadoutSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, slot: Slot, item: ItemId) -> Self {
        self.slots.insert(slot, item);
        self
    }

    pub fn with_companion(mut self, companion: CompanionId) -> Self {
        self.companion = Some(companion);
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn avoiding(mut self, item: ItemId) -> Self {
        self.avoid.insert(item);
        self
    }

    pub fn with_mode(mut self, item: &ItemId, mode: impl Into<String>) -> Self {
        self.modes.insert(item.to_string(), mode.into());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&ItemId> {
        self.slots.get(&slot)
    }

    pub fn is_open(&self, slot: Slot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Whether `item` is worn in any slot.
    pub fn wears(&self, item: &ItemId) -> bool {
        self.slots.values().any(|worn| worn == item)
    }

    /// Removes `item` from whichever slot holds it.
    pub fn take_off(&mut self, item: &ItemId) {
        self.slots.retain(|_, worn| worn != item);
    }

    /// Fails on the first slot item or companion `world` does not possess.
    ///
    /// Equipment ports call this before touching any slot.
    pub fn ensure_possessed(&self, world: &dyn WorldQuery) -> Result<()> {
        for (slot, item) in &self.slots {
            if !world.has_item(item) {
                return Err(AgentError::unavailable(
                    Entity::Item(item.clone()),
                    format!("equipping {slot}"),
                ));
            }
        }
        if let Some(companion) = &self.companion {
            if !world.has_companion(companion) {
                return Err(AgentError::unavailable(
                    Entity::Companion(companion.clone()),
                    "companion",
                ));
            }
        }
        Ok(())
    }
}

/// What the coming encounter looks like, as far as valuation cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterContext {
    pub location: LocationId,
    /// The fight will not cost a turn.
    pub free: bool,
}

impl EncounterContext {
    pub fn new(location: LocationId, free: bool) -> Self {
        Self { location, free }
    }
}
