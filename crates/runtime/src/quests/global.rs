//! Daily opportunities that interrupt the zone quest.
use std::cell::Cell;
use std::rc::Rc;

use agent_content::{effects, items, locations, skills};
use agent_core::{
    AgentError, Attribute, CapabilityPort, CharacterClass, MonsterId, Slot, Sobriety, Target,
    WorldQuery,
};
use macro_tree::Macro;

use super::{island_target, wanderer_task};
use crate::engine::{Quest, Task};
use crate::providers::combat::{
    DIGITIZE_MONSTER, DIGITIZE_MONSTER_COUNT, VOID_FREE_FIGHT_LIMIT, VOID_FREE_FIGHTS,
    VOTE_FREE_FIGHT_LIMIT, VOTE_FREE_FIGHTS,
};
use crate::providers::{DIGITIZE_COUNTDOWN, EncounterContext, LoadoutSpec};

pub const GLOBAL_QUEST: &str = "Merry Crimbo!";

const GHOST_QUEST: &str = "questPAGhost";
const GHOST_LOCATION: &str = "ghostLocation";
const CLEAVER_FIGHTS_LEFT: &str = "_juneCleaverFightsLeft";
const LAST_VOTE_MONSTER_TURN: &str = "lastVoteMonsterTurn";
const MAGNIFYING_GLASS_COUNT: &str = "cursedMagnifyingGlassCount";

/// Opportunity tasks, highest priority first.
///
/// `world` seeds the digitize counter the wanderer task watches.
pub fn global_quest(world: &dyn WorldQuery) -> Quest {
    let digitizes = Rc::new(Cell::new(world.counter(DIGITIZE_MONSTER_COUNT)));

    Quest::new(
        GLOBAL_QUEST,
        vec![
            june_cleaver(),
            proton_ghost(),
            grey_you_attack_skill(),
            vote_wanderer(),
            digitize_wanderer(digitizes),
            void_monster(),
            sausage_goblin(),
            spit_jurassic_acid(),
        ],
    )
}

fn june_cleaver() -> Task {
    Task::dynamic("June Cleaver", |ctx| {
        let location = if ctx.world.is_intoxicated() {
            locations::DRUNKEN_STUPOR
        } else {
            locations::NOOB_CAVE
        };
        Ok(Target::Adventure(location))
    })
    .ready(|world| world.has_item(&items::JUNE_CLEAVER) && world.counter(CLEAVER_FIGHTS_LEFT) == 0)
    .completed(|world| world.counter(CLEAVER_FIGHTS_LEFT) > 0)
    .outfit(LoadoutSpec::new().with_slot(Slot::Weapon, items::JUNE_CLEAVER))
    .combat(|_| Macro::new().abort())
}

fn ghost_started(world: &dyn WorldQuery) -> bool {
    world
        .property(GHOST_QUEST)
        .is_some_and(|state| state != "unstarted")
}

fn proton_ghost() -> Task {
    Task::dynamic("Proton Ghost", |ctx| {
        ctx.world
            .property(GHOST_LOCATION)
            .map(|location| Target::Adventure(location.into()))
            .ok_or_else(|| AgentError::precondition("Proton Ghost", "ghost location unknown"))
    })
    .ready(|world| {
        world.has_item(&items::PROTON_PACK)
            && ghost_started(world)
            && world.property(GHOST_LOCATION).is_some()
    })
    .completed(|world| !ghost_started(world))
    .sobriety(Sobriety::Sober)
    .loadout(|ctx, target| {
        let Some(location) = target.location() else {
            return Err(AgentError::precondition("Proton Ghost", "ghost location unknown"));
        };
        let mut overrides = LoadoutSpec::new().with_slot(Slot::Back, items::PROTON_PACK);
        if *location == locations::ICY_PEAK {
            overrides = overrides.avoiding(items::GREAT_WOLF_TROUSERS);
        }
        let encounter = EncounterContext::new(location.clone(), true);
        ctx.loadout.optimize(ctx.world, &encounter, overrides)
    })
    .combat(|_| {
        Macro::new()
            .try_skill(skills::SING_ALONG.as_str())
            .try_skill(skills::SHOOT_GHOST.as_str())
            .try_skill(skills::SHOOT_GHOST.as_str())
            .try_skill(skills::SHOOT_GHOST.as_str())
            .try_skill(skills::TRAP_GHOST.as_str())
    })
}

fn grey_you_attack_skill() -> Task {
    Task::new(
        "Grey You Attack Skill",
        Target::Adventure(locations::HAUNTED_STORAGE_ROOM),
    )
    .ready(|world| world.character_class() == CharacterClass::GreyGoo)
    .completed(|world| {
        [skills::NANTLERS, skills::NANOSHOCK, skills::AUDIOCLASM]
            .iter()
            .any(|skill| world.knows_skill(skill))
    })
    .sobriety(Sobriety::Sober)
    .combat(|_| Macro::new().attack().repeat())
}

fn vote_wanderer() -> Task {
    wanderer_task(
        "Vote Wanderer",
        |_| true,
        LoadoutSpec::new().with_slot(Slot::Acc3, items::VOTED_STICKER),
    )
    .ready(|world| {
        let played = world.attribute(Attribute::TurnsPlayed);
        world.has_item(&items::VOTED_STICKER)
            && played % 11 == 1
            && world.counter(LAST_VOTE_MONSTER_TURN) < played
            && world.counter(VOTE_FREE_FIGHTS) < VOTE_FREE_FIGHT_LIMIT
    })
    .completed(|world| {
        world.counter(LAST_VOTE_MONSTER_TURN) == world.attribute(Attribute::TurnsPlayed)
    })
    .combat(|c| Macro::new().step(c.redigitize()).step(c.standard()))
}

fn digitized_is_free(world: &dyn WorldQuery) -> bool {
    world
        .property(DIGITIZE_MONSTER)
        .and_then(|monster| world.monster(&MonsterId::owned(monster)))
        .is_some_and(|info| info.free)
}

/// Fights the digitized copy when its countdown fires.
///
/// Completion compares the copy counter against the value seen after the
/// last run of this task, so the task comes back after every recurrence.
fn digitize_wanderer(digitizes: Rc<Cell<i64>>) -> Task {
    let seen = Rc::clone(&digitizes);
    wanderer_task("Digitize Wanderer", digitized_is_free, LoadoutSpec::new())
        .ready(|world| {
            world
                .countdown(DIGITIZE_COUNTDOWN)
                .is_some_and(|turns| turns <= 0)
        })
        .completed(move |world| world.counter(DIGITIZE_MONSTER_COUNT) != seen.get())
        .post(move |host| {
            digitizes.set(host.world().counter(DIGITIZE_MONSTER_COUNT));
            Ok(())
        })
        .combat(|c| Macro::new().step(c.redigitize()).step(c.standard()))
}

fn void_monster() -> Task {
    wanderer_task(
        "Void Monster",
        |_| true,
        LoadoutSpec::new().with_slot(Slot::Offhand, items::CURSED_MAGNIFYING_GLASS),
    )
    .ready(|world| {
        world.has_item(&items::CURSED_MAGNIFYING_GLASS) && world.counter(MAGNIFYING_GLASS_COUNT) == 13
    })
    .completed(|world| world.counter(VOID_FREE_FIGHTS) >= VOID_FREE_FIGHT_LIMIT)
}

fn sausage_goblin() -> Task {
    wanderer_task(
        "Sausage Goblin",
        |_| true,
        LoadoutSpec::new().with_slot(Slot::Offhand, items::KRAMCO),
    )
    .ready(|world| {
        world.has_item(&items::KRAMCO) && world.attribute(Attribute::SausageGoblinChance) >= 100
    })
    .completed(|world| world.attribute(Attribute::SausageGoblinChance) < 100)
}

fn spit_jurassic_acid() -> Task {
    Task::dynamic("Spit Jurassic Acid", island_target)
        .ready(|world| {
            world.has_item(&items::JURASSIC_PARKA) && world.knows_skill(&skills::TORSO_AWARENESS)
        })
        .completed(|world| world.has_effect(&effects::EVERYTHING_LOOKS_YELLOW))
        .sobriety(Sobriety::Sober)
        .loadout(|ctx, _| {
            let overrides = LoadoutSpec::new()
                .with_slot(Slot::Shirt, items::JURASSIC_PARKA)
                .with_mode(&items::JURASSIC_PARKA, "dilophosaur");
            let encounter = EncounterContext::new(ctx.loadout.island().location.clone(), true);
            ctx.loadout.optimize(ctx.world, &encounter, overrides)
        })
        .combat(|c| c.yellow_ray_unless_free())
}

#[cfg(test)]
mod tests {
    use agent_core::{AgentConfig, WorldSnapshot};

    use super::*;
    use crate::engine::Engine;

    fn next_task_name(world: &WorldSnapshot) -> Option<String> {
        let engine = Engine::builder(AgentConfig::default())
            .quest(global_quest(world))
            .build();
        engine
            .next_task(world)
            .ok()
            .map(|(_, task)| task.name().to_owned())
    }

    #[test]
    fn idle_world_has_no_opportunity() {
        assert_eq!(next_task_name(&WorldSnapshot::new()), None);
    }

    #[test]
    fn cleaver_comes_first() {
        let world = WorldSnapshot::new()
            .with_item(items::JUNE_CLEAVER, 1)
            .with_item(items::KRAMCO, 1)
            .with_attribute(Attribute::SausageGoblinChance, 100);
        assert_eq!(next_task_name(&world).as_deref(), Some("June Cleaver"));
    }

    #[test]
    fn drunk_cleaver_goes_to_stupor() {
        let world = WorldSnapshot::new()
            .with_attribute(Attribute::Inebriety, 30)
            .with_attribute(Attribute::InebrietyLimit, 15);
        let engine = Engine::builder(AgentConfig::default()).build();
        let target = june_cleaver()
            .resolve_target(&engine.context(&world))
            .unwrap();
        assert_eq!(target, Target::Adventure(locations::DRUNKEN_STUPOR));
    }

    #[test]
    fn ghost_needs_a_location() {
        let started = WorldSnapshot::new()
            .with_item(items::PROTON_PACK, 1)
            .with_property(GHOST_QUEST, "started");
        assert_eq!(next_task_name(&started), None);

        let located = started.with_property(GHOST_LOCATION, "The Icy Peak");
        assert_eq!(next_task_name(&located).as_deref(), Some("Proton Ghost"));
    }

    #[test]
    fn vote_wanderer_waits_for_the_eleventh_turn() {
        let world = WorldSnapshot::new()
            .with_item(items::VOTED_STICKER, 1)
            .with_attribute(Attribute::TurnsPlayed, 23)
            .with_counter(LAST_VOTE_MONSTER_TURN, 12);
        assert_eq!(next_task_name(&world).as_deref(), Some("Vote Wanderer"));

        let exhausted = world.clone().with_counter(VOTE_FREE_FIGHTS, 3);
        assert_eq!(next_task_name(&exhausted), None);

        let later = world.with_attribute(Attribute::TurnsPlayed, 24);
        assert_eq!(next_task_name(&later), None);
    }

    #[test]
    fn digitize_task_completes_until_the_copy_returns() {
        let world = WorldSnapshot::new()
            .with_countdown(DIGITIZE_COUNTDOWN, 0)
            .with_counter(DIGITIZE_MONSTER_COUNT, 2);
        let digitizes = Rc::new(Cell::new(2));
        let task = digitize_wanderer(Rc::clone(&digitizes));

        assert!(task.is_admissible(&world));

        let recurred = world.with_counter(DIGITIZE_MONSTER_COUNT, 3);
        assert!(task.is_completed(&recurred));

        digitizes.set(3);
        assert!(!task.is_completed(&recurred));
    }
}
