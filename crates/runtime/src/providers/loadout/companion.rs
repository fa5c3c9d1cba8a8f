//! Companion selection.
use agent_content::{HOLIDAY_ISLANDS, companions, items};
use agent_core::{Attribute, CapabilityPort, CompanionId, ItemId, LocationId, WorldQuery};
use tracing::debug;

use super::rules::companion_equipment;
use crate::providers::ranking::stable_max_by;

/// Constraints on the companion for one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanionOptions {
    pub location: LocationId,
    /// The companion may wear its own equipment.
    pub allow_equipment: bool,
    /// The companion may attack the opponent.
    pub allow_attack: bool,
}

/// Fallback choice once no fixed preference applies.
pub trait CompanionPolicy {
    fn choose(&self, world: &dyn WorldQuery, options: &CompanionOptions) -> Option<CompanionId>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompanionEntry {
    pub companion: CompanionId,
    /// Expected meat per fight.
    pub value: f64,
    /// Deals damage on its own.
    pub attacks: bool,
    /// Only useful while sober.
    pub sober_only: bool,
}

impl CompanionEntry {
    pub fn new(companion: CompanionId, value: f64) -> Self {
        Self {
            companion,
            value,
            attacks: false,
            sober_only: false,
        }
    }

    pub fn attacking(mut self) -> Self {
        self.attacks = true;
        self
    }

    pub fn sober_only(mut self) -> Self {
        self.sober_only = true;
        self
    }
}

/// Highest-value owned companion that fits the options.
#[derive(Clone, Debug, Default)]
pub struct ValueRankedCompanions {
    entries: Vec<CompanionEntry>,
}

impl ValueRankedCompanions {
    pub fn new(entries: Vec<CompanionEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            CompanionEntry::new(companions::JILL_OF_ALL_TRADES, 350.0),
            CompanionEntry::new(companions::COOKBOOKBAT, 300.0).sober_only(),
            CompanionEntry::new(companions::SHORTER_ORDER_COOK, 280.0),
            CompanionEntry::new(companions::HOBO_MONKEY, 250.0).attacking(),
            CompanionEntry::new(companions::STOCKING_MIMIC, 220.0).attacking(),
            CompanionEntry::new(companions::GREY_GOOSE, 200.0),
        ])
    }
}

impl CompanionPolicy for ValueRankedCompanions {
    fn choose(&self, world: &dyn WorldQuery, options: &CompanionOptions) -> Option<CompanionId> {
        let sober = !world.is_intoxicated();
        let eligible = self.entries.iter().filter(|entry| {
            world.has_companion(&entry.companion)
                && (options.allow_attack || !entry.attacks)
                && (sober || !entry.sober_only)
        });

        stable_max_by(eligible, |entry| entry.value).map(|entry| entry.companion.clone())
    }
}

/// Fixed preferences first, then the pluggable policy.
pub struct CompanionSelector {
    shrub: bool,
    policy: Box<dyn CompanionPolicy>,
}

impl CompanionSelector {
    pub fn new(shrub: bool, policy: Box<dyn CompanionPolicy>) -> Self {
        Self { shrub, policy }
    }

    pub fn choose(&self, world: &dyn WorldQuery, options: &CompanionOptions) -> Option<CompanionId> {
        let on_islands = world.zone_of(&options.location).as_deref() == Some(HOLIDAY_ISLANDS);
        if self.shrub
            && on_islands
            && shrub_gift_pending(world)
            && world.has_companion(&companions::CRIMBO_SHRUB)
        {
            return Some(companions::CRIMBO_SHRUB);
        }

        if world.has_companion(&companions::PEACE_TURKEY) {
            return Some(companions::PEACE_TURKEY);
        }

        if world.has_flag("canInteract") && !world.is_intoxicated() {
            if world.has_companion(&companions::TEMPORAL_RIFTLET) {
                return Some(companions::TEMPORAL_RIFTLET);
            }
            let gnome_geared = world.can_wear(&items::GNOMISH_KGNEE);
            if options.allow_equipment
                && gnome_geared
                && world.has_companion(&companions::REAGNIMATED_GNOME)
            {
                return Some(companions::REAGNIMATED_GNOME);
            }
        }

        let chosen = self.policy.choose(world, options);
        debug!(
            target: "runtime::loadout",
            companion = chosen.as_ref().map(|c| c.as_str()),
            "companion policy consulted"
        );
        chosen
    }

    /// The companion's own equipment, when it has any and may wear it.
    pub fn equipment_for(
        &self,
        world: &dyn WorldQuery,
        companion: &CompanionId,
        options: &CompanionOptions,
    ) -> Option<ItemId> {
        if !options.allow_equipment {
            return None;
        }
        companion_equipment(companion).filter(|item| world.can_wear(item))
    }
}

/// The gift-bearing companion has a present to hand out.
pub fn shrub_gift_pending(world: &dyn WorldQuery) -> bool {
    world.property("shrubGifts").as_deref() == Some("gifts") && !world.has_flag("_shrubDropped")
}

/// The goose is heavy enough to turn into meat.
pub fn time_to_meatify(world: &dyn WorldQuery) -> bool {
    world.attribute(Attribute::FamiliarWeight) >= 20
}
