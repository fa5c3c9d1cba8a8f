//! Island farming.
//!
//! Timed free kills and runs go first, then noncombat forcers, then daily
//! free kills and runs, and finally regular fights until the turns run out.
//! Every island task answers the island's choice adventure with the option
//! that keeps the actor on the island.
use agent_content::{effects, island, items, skills};
use agent_core::{AgentConfig, Attribute, CapabilityPort, Slot, Sobriety, Usable, WorldQuery};

use super::island_target;
use crate::api::ChoiceMap;
use crate::engine::{Quest, Task};
use crate::providers::{IslandFight, LoadoutSpec};

pub const ISLAND_QUEST: &str = "Island Adventuring";

const NONCOMBAT_FORCER_ACTIVE: &str = "noncombatForcerActive";
const DAILY_USES: i64 = 3;
const CINCH_CAPACITY: i64 = 100;
const FIESTA_EXIT_CINCH: i64 = 60;
const TUBA_PLAYS: i64 = 3;
const SHADOW_BRICKS_PER_DAY: i64 = 13;

/// Island fight ended by `action`.
fn island_fight(action: impl Into<Usable>, fight: IslandFight, overrides: LoadoutSpec) -> Task {
    let action = action.into();
    let name = action.to_string();
    Task::dynamic(name, island_target)
        .sobriety(Sobriety::Sober)
        .loadout(move |ctx, _| {
            ctx.loadout
                .island_loadout(ctx.world, fight, overrides.clone())
        })
        .combat(move |c| match fight {
            IslandFight::FreeRun => c.run_with(&action),
            IslandFight::FreeKill | IslandFight::Regular => c.kill_with(&action),
        })
}

fn free_kill(action: impl Into<Usable>) -> Task {
    island_fight(action, IslandFight::FreeKill, LoadoutSpec::new())
}

fn free_run(action: impl Into<Usable>) -> Task {
    island_fight(action, IslandFight::FreeRun, LoadoutSpec::new())
}

fn counter_at_least(world: &dyn WorldQuery, name: &str, limit: i64) -> bool {
    world.counter(name) >= limit
}

/// Tasks for the configured island, in priority order.
pub fn island_quest(config: &AgentConfig) -> Quest {
    let island = island(config.island.as_deref());
    let stay = ChoiceMap::from([(island.choice, 2)]);
    let value_of_adventure = config.value_of_adventure;

    let tasks = vec![
        forced_noncombat(),
        // Timed free kills.
        island_fight(
            skills::SPIT_JURASSIC_ACID,
            IslandFight::FreeKill,
            LoadoutSpec::new()
                .with_slot(Slot::Shirt, items::JURASSIC_PARKA)
                .with_mode(&items::JURASSIC_PARKA, "dilophosaur"),
        )
        .ready(|world| {
            world.has_item(&items::JURASSIC_PARKA) && world.knows_skill(&skills::TORSO_AWARENESS)
        })
        .completed(|world| world.has_effect(&effects::EVERYTHING_LOOKS_YELLOW)),
        free_kill(skills::FREE_FOR_ALL)
            .ready(|world| world.knows_skill(&skills::FREE_FOR_ALL))
            .completed(|world| world.has_effect(&effects::EVERYTHING_LOOKS_RED)),
        // Timed free runs.
        free_run(skills::ASDON_BUMPER)
            .ready(|world| world.has_flag("asdonMartinInstalled"))
            .completed(|world| {
                world
                    .property("banishedMonsters")
                    .is_some_and(|banished| banished.contains(skills::ASDON_BUMPER.as_str()))
            }),
        island_fight(
            skills::SPRING_AWAY,
            IslandFight::FreeRun,
            LoadoutSpec::new().with_slot(Slot::Acc1, items::SPRING_SHOES),
        )
        .ready(|world| world.has_item(&items::SPRING_SHOES))
        .completed(|world| world.has_effect(&effects::EVERYTHING_LOOKS_GREEN)),
        free_run(skills::BOWL_A_CURVEBALL)
            .ready(|world| world.has_flag("hasCosmicBowlingBall"))
            .completed(|world| counter_at_least(world, "cosmicBowlingBallReturnCombats", 1)),
        // Noncombat forcers.
        Task::new("Clara's Bell", Usable::Item(items::CLARAS_BELL))
            .ready(|world| world.has_item(&items::CLARAS_BELL))
            .completed(|world| world.has_flag("_claraBellUsed")),
        Task::new("Pillkeeper", Usable::Item(items::PILL_KEEPER))
            .ready(|world| world.has_item(&items::PILL_KEEPER))
            .completed(|world| world.has_flag("_freePillKeeperUsed")),
        Task::new("Fiesta Exit", Usable::Skill(skills::FIESTA_EXIT))
            .ready(|world| world.has_item(&items::CINCHO_DE_MAYO))
            .completed(|world| CINCH_CAPACITY - world.counter("_cinchUsed") < FIESTA_EXIT_CINCH),
        Task::new("Apriling Tuba", Usable::Item(items::APRILING_TUBA)).completed(|world| {
            !world.has_item(&items::APRILING_TUBA)
                || counter_at_least(world, "_aprilBandTubaUses", TUBA_PLAYS)
        }),
        // Free kills.
        free_kill(skills::SHOCKING_LICK)
            .completed(|world| world.counter("shockingLickCharges") <= 0),
        island_fight(
            skills::FIRE_JOKESTERS_GUN,
            IslandFight::FreeKill,
            LoadoutSpec::new().with_slot(Slot::Weapon, items::JOKESTERS_GUN),
        )
        .ready(|world| world.has_item(&items::JOKESTERS_GUN))
        .completed(|world| world.has_flag("_firedJokestersGun")),
        free_kill(skills::SHATTERING_PUNCH)
            .ready(|world| world.knows_skill(&skills::SHATTERING_PUNCH))
            .completed(|world| counter_at_least(world, "_shatteringPunchUsed", DAILY_USES)),
        free_kill(skills::GINGERBREAD_MOB_HIT)
            .ready(|world| world.knows_skill(&skills::GINGERBREAD_MOB_HIT))
            .completed(|world| world.has_flag("_gingerbreadMobHitUsed")),
        free_kill(items::SHADOW_BRICK)
            .ready(move |world| {
                world.has_item(&items::SHADOW_BRICK)
                    && (world.market_value(&items::SHADOW_BRICK) as f64) < value_of_adventure
            })
            .completed(|world| {
                counter_at_least(world, "_shadowBricksUsed", SHADOW_BRICKS_PER_DAY)
            }),
        free_kill(items::REPLICA_BATOOMERANG)
            .ready(|world| world.has_item(&items::REPLICA_BATOOMERANG))
            .completed(|world| counter_at_least(world, "_usedReplicaBatoomerang", DAILY_USES)),
        island_fight(
            skills::CHEST_X_RAY,
            IslandFight::FreeKill,
            LoadoutSpec::new().with_slot(Slot::Acc1, items::LIL_DOCTOR_BAG),
        )
        .ready(|world| world.has_item(&items::LIL_DOCTOR_BAG))
        .completed(|world| counter_at_least(world, "_chestXRayUsed", DAILY_USES)),
        island_fight(
            skills::ASSERT_YOUR_AUTHORITY,
            IslandFight::FreeKill,
            LoadoutSpec::new()
                .with_slot(Slot::Weapon, items::SHERIFF_PISTOL)
                .with_slot(Slot::Acc1, items::SHERIFF_BADGE)
                .with_slot(Slot::Acc2, items::SHERIFF_MOUSTACHE),
        )
        .ready(|world| {
            [
                items::SHERIFF_MOUSTACHE,
                items::SHERIFF_BADGE,
                items::SHERIFF_PISTOL,
            ]
            .iter()
            .all(|item| world.has_item(item))
        })
        .completed(|world| counter_at_least(world, "_assertYourAuthorityCast", DAILY_USES)),
        // Free runs.
        free_run(skills::FEEL_HATRED)
            .ready(|world| world.knows_skill(&skills::EMOTIONALLY_CHIPPED))
            .completed(|world| counter_at_least(world, "_feelHatredUsed", DAILY_USES)),
        free_run(skills::SNOKEBOMB)
            .ready(|world| world.knows_skill(&skills::SNOKEBOMB))
            .completed(|world| counter_at_least(world, "_snokebombUsed", DAILY_USES)),
        free_run(skills::REFLEX_HAMMER)
            .ready(|world| world.has_item(&items::LIL_DOCTOR_BAG))
            .completed(|world| counter_at_least(world, "_reflexHammerUsed", DAILY_USES)),
        island_adventuring(),
    ];

    Quest::new(
        ISLAND_QUEST,
        tasks
            .into_iter()
            .map(|task| task.choice_map(stay.clone()))
            .collect(),
    )
}

/// Lets an already forced noncombat happen on the island.
fn forced_noncombat() -> Task {
    Task::dynamic("Forced Noncombat", island_target)
        .completed(|world| !world.has_flag(NONCOMBAT_FORCER_ACTIVE))
        .loadout(|ctx, _| {
            let island = ctx.loadout.island();
            let mut spec =
                LoadoutSpec::new().with_modifier(format!("{} Resistance", island.element));
            if ctx.world.is_intoxicated() && ctx.world.can_wear(&items::DRUNKULA_WINEGLASS) {
                spec = spec.with_slot(Slot::Offhand, items::DRUNKULA_WINEGLASS);
            }
            Ok(spec)
        })
}

fn island_adventuring() -> Task {
    Task::dynamic("Island Adventuring", island_target)
        .completed(|world| world.attribute(Attribute::Adventures) == 0)
        .loadout(|ctx, _| {
            ctx.loadout
                .island_loadout(ctx.world, IslandFight::Regular, LoadoutSpec::new())
        })
        .combat(|c| c.hard())
}
