//! Built-in quests.
//!
//! The global quest handles daily opportunities that can show up anywhere;
//! the zone quest spends every remaining turn in the configured zone.
mod cafe;
mod global;
mod island;

use agent_core::{AgentConfig, LocationId, Result, Target, WorldQuery, Zone};

pub use cafe::{CAFE_QUEST, cafe_quest};
pub use global::{GLOBAL_QUEST, global_quest};
pub use island::{ISLAND_QUEST, island_quest};

use crate::engine::{Quest, Task, TaskContext};
use crate::providers::{EncounterContext, LoadoutSpec, WandererCategory};

/// The global quest followed by the configured zone's quest.
pub fn standard_quests(world: &dyn WorldQuery, config: &AgentConfig) -> Vec<Quest> {
    let zone = match config.zone {
        Zone::Island => island_quest(config),
        Zone::Cafe => cafe_quest(),
    };
    vec![global_quest(world), zone]
}

type FreeFn = fn(&dyn WorldQuery) -> bool;

/// Task that meets a wandering opponent wherever the selector says.
fn wanderer_task(name: &str, free: FreeFn, overrides: LoadoutSpec) -> Task {
    Task::dynamic(name, |ctx| Ok(Target::Adventure(wanderer_target(ctx))))
        .loadout(move |ctx, target| {
            let location = target
                .location()
                .cloned()
                .unwrap_or_else(|| ctx.wanderer.default_target().clone());
            let encounter = EncounterContext::new(location, free(ctx.world));
            ctx.loadout.optimize(ctx.world, &encounter, overrides.clone())
        })
        .choices(|ctx| {
            ctx.wanderer
                .get_choices(ctx.world, WandererCategory::Wanderer)
        })
}

fn wanderer_target(ctx: &TaskContext<'_>) -> LocationId {
    ctx.wanderer.get_target(ctx.world, WandererCategory::Wanderer)
}

/// Target at the configured island.
fn island_target(ctx: &TaskContext<'_>) -> Result<Target> {
    Ok(Target::Adventure(ctx.loadout.island().location.clone()))
}
