//! Ordered slot rules.
//!
//! For every open slot the optimizer walks its rules in declaration order and
//! wears the first item that is owned, wearable, not avoided and whose
//! condition holds.
use agent_content::{companions, items};
use agent_core::{Attribute, CompanionId, ItemId, Slot, WorldQuery};

use super::EncounterContext;
use crate::providers::combat::{VOID_FREE_FIGHT_LIMIT, VOID_FREE_FIGHTS};

pub type RuleCondition = fn(&dyn WorldQuery, &EncounterContext) -> bool;

#[derive(Clone, Debug)]
pub struct SlotRule {
    pub slot: Slot,
    pub item: ItemId,
    pub condition: Option<RuleCondition>,
}

impl SlotRule {
    pub const fn always(slot: Slot, item: ItemId) -> Self {
        Self {
            slot,
            item,
            condition: None,
        }
    }

    pub const fn when(slot: Slot, item: ItemId, condition: RuleCondition) -> Self {
        Self {
            slot,
            item,
            condition: Some(condition),
        }
    }

    pub fn holds(&self, world: &dyn WorldQuery, encounter: &EncounterContext) -> bool {
        self.condition
            .is_none_or(|condition| condition(world, encounter))
    }
}

/// Rules for quest encounters, grouped by slot.
pub fn quest_rules() -> Vec<SlotRule> {
    vec![
        SlotRule::always(Slot::Weapon, items::JUNE_CLEAVER),
        SlotRule::always(Slot::Weapon, items::COSPLAY_SABER),
        SlotRule::always(Slot::Offhand, items::DEFT_PIRATE_HOOK),
        SlotRule::always(Slot::Offhand, items::POTTED_PLANT),
        SlotRule::when(Slot::Offhand, items::CURSED_MAGNIFYING_GLASS, void_charge_wanted),
        SlotRule::when(Slot::Back, items::PROTON_PACK, ghost_due),
        SlotRule::always(Slot::Back, items::BUDDY_BJORN),
        SlotRule::always(Slot::Famequip, items::TINY_STILLSUIT),
        SlotRule::always(Slot::Famequip, items::AMULET_COIN),
        SlotRule::when(Slot::Pants, items::DESIGNER_SWEATPANTS, sweat_wanted),
        SlotRule::when(Slot::Pants, items::PANTSGIVING, pantsgiving_wanted),
    ]
}

/// Equipment that only makes sense on one particular companion.
pub fn companion_equipment(companion: &CompanionId) -> Option<ItemId> {
    if *companion == companions::REAGNIMATED_GNOME {
        Some(items::GNOMISH_KGNEE)
    } else if *companion == companions::SHORTER_ORDER_COOK {
        Some(items::BLUE_PLATE)
    } else if *companion == companions::STOCKING_MIMIC {
        Some(items::BAG_OF_MANY_CONFECTIONS)
    } else {
        None
    }
}

fn void_charge_wanted(world: &dyn WorldQuery, encounter: &EncounterContext) -> bool {
    !encounter.free
        && world.counter(VOID_FREE_FIGHTS) < VOID_FREE_FIGHT_LIMIT
        && world.counter("cursedMagnifyingGlassCount") < 13
}

fn ghost_due(world: &dyn WorldQuery, _: &EncounterContext) -> bool {
    world.property("questPAGhost").as_deref() == Some("unstarted")
        && world.counter("nextParanormalActivity") <= world.attribute(Attribute::TurnsPlayed)
        && !world.is_intoxicated()
}

fn sweat_wanted(world: &dyn WorldQuery, _: &EncounterContext) -> bool {
    25 * world.counter("_sweatOutSomeBoozeUsed") + world.counter("sweat") < 75
}

fn pantsgiving_wanted(world: &dyn WorldQuery, _: &EncounterContext) -> bool {
    world.counter("_pantsgivingCount") < 50
        || (world.counter("_pantsgivingFullness") < 2
            && world.attribute(Attribute::RemainingStomach) == 0)
}

#[cfg(test)]
mod tests {
    use agent_content::locations;
    use agent_core::WorldSnapshot;

    use super::*;

    fn paid() -> EncounterContext {
        EncounterContext::new(locations::NOOB_CAVE, false)
    }

    #[test]
    fn cursed_glass_only_charges_on_paid_fights() {
        let world = WorldSnapshot::new().with_counter("cursedMagnifyingGlassCount", 4);
        let rule = SlotRule::when(Slot::Offhand, items::CURSED_MAGNIFYING_GLASS, void_charge_wanted);

        assert!(rule.holds(&world, &paid()));
        assert!(!rule.holds(&world, &EncounterContext::new(locations::NOOB_CAVE, true)));
        assert!(!rule.holds(&world.with_counter("cursedMagnifyingGlassCount", 13), &paid()));
    }

    #[test]
    fn pantsgiving_waits_for_empty_stomach_once_counted_out() {
        let counted_out = WorldSnapshot::new()
            .with_counter("_pantsgivingCount", 50)
            .with_attribute(Attribute::RemainingStomach, 3);
        assert!(!pantsgiving_wanted(&counted_out, &paid()));
        assert!(pantsgiving_wanted(
            &counted_out.with_attribute(Attribute::RemainingStomach, 0),
            &paid()
        ));
    }

    #[test]
    fn companion_specific_equipment() {
        assert_eq!(
            companion_equipment(&companions::REAGNIMATED_GNOME),
            Some(items::GNOMISH_KGNEE)
        );
        assert_eq!(companion_equipment(&companions::HOBO_MONKEY), None);
    }
}
