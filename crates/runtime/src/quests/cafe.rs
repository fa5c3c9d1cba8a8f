//! Cafe farming.
use agent_content::{effects, items, locations, skills};
use agent_core::{CapabilityPort, Slot};

use crate::engine::{Quest, Task};
use crate::providers::{EncounterContext, LoadoutSpec, orb_worthwhile};

pub const CAFE_QUEST: &str = "Cafe";

/// Regular fights at the cafe with the weight buffs kept up.
pub fn cafe_quest() -> Quest {
    let fight = Task::new("Crimbo", locations::CAFE)
        .effect(effects::BLOOD_BOND, skills::BLOOD_BOND)
        .effect(effects::EMPATHY, skills::EMPATHY_OF_THE_NEWT)
        .effect(effects::LEASH_OF_LINGUINI, skills::LEASH_OF_LINGUINI)
        .loadout(|ctx, _| {
            let world = ctx.world;
            let mut overrides = LoadoutSpec::new();
            if world.is_intoxicated() && world.can_wear(&items::DRUNKULA_WINEGLASS) {
                overrides = overrides.with_slot(Slot::Offhand, items::DRUNKULA_WINEGLASS);
            }
            let island = ctx.loadout.island();
            if orb_worthwhile(world, &island.location, ctx.loadout.orb_target()) {
                overrides = overrides.with_slot(Slot::Famequip, items::CRYSTAL_BALL);
            }
            let encounter = EncounterContext::new(locations::CAFE, false);
            ctx.loadout.optimize(world, &encounter, overrides)
        });

    Quest::new(CAFE_QUEST, vec![fight])
}
