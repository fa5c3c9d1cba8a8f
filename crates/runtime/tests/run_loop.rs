mod common;

use std::collections::BTreeMap;

use agent_content::{effects, items, locations, monsters, skills};
use agent_core::{AgentConfig, AgentError, Attribute, ItemId, Sobriety, Usable, WorldQuery};
use common::{Call, RecordingHost, world_with_turns};
use macro_tree::Macro;
use runtime::{
    ChoiceMap, CombatCompiler, Engine, LoadoutSpec, Outcome, Quest, StopReason, Task,
};

fn config(turns: i64) -> AgentConfig {
    AgentConfig {
        turns,
        ..AgentConfig::default()
    }
}

fn farm() -> Task {
    Task::new("farm", locations::NOOB_CAVE)
}

fn engine(turns: i64, tasks: Vec<Task>) -> Engine {
    Engine::builder(config(turns))
        .quest(Quest::new("Daily", tasks))
        .build()
}

#[test]
fn play_budget_stops_after_requested_turns() {
    let mut host = RecordingHost::new(world_with_turns(10));
    let report = engine(3, vec![farm()]).run(&mut host).unwrap();

    assert_eq!(report.cycles, 3);
    assert_eq!(report.stop, Some(StopReason::TurnsPlayed(3)));
    assert_eq!(report.executions, BTreeMap::from([("farm".to_owned(), 3)]));
    assert_eq!(
        host.calls,
        vec![Call::Navigate(locations::NOOB_CAVE); 3]
    );
}

#[test]
fn reserve_budget_keeps_turns() {
    let mut host = RecordingHost::new(world_with_turns(10));
    let report = engine(-8, vec![farm()]).run(&mut host).unwrap();

    assert_eq!(report.cycles, 2);
    assert_eq!(report.stop, Some(StopReason::ReserveReached(8)));
    assert_eq!(host.world.attribute(Attribute::Adventures), 8);
}

#[test]
fn selection_skips_unready_and_completed_tasks() {
    let tasks = vec![
        Task::new("A", locations::ICY_PEAK).ready(|_| false),
        Task::new("B", locations::NOOB_CAVE),
        Task::new("C", locations::CAFE).completed(|_| true),
    ];
    let mut host = RecordingHost::new(world_with_turns(10));
    let report = engine(3, tasks).run(&mut host).unwrap();

    assert_eq!(report.executions, BTreeMap::from([("B".to_owned(), 3)]));
}

#[test]
fn completed_quests_end_the_run() {
    let quest = Quest::new("Daily", vec![farm()])
        .completed(|world| world.attribute(Attribute::Turncount) >= 2);
    let engine = Engine::builder(config(10)).quest(quest).build();
    let mut host = RecordingHost::new(world_with_turns(10));

    let report = engine.run(&mut host).unwrap();
    assert_eq!(report.cycles, 2);
    assert_eq!(report.stop, Some(StopReason::QuestsCompleted));
}

#[test]
fn nothing_to_do_is_fatal() {
    let mut host = RecordingHost::new(world_with_turns(10));
    let err = engine(3, vec![farm().ready(|_| false)])
        .run(&mut host)
        .unwrap_err();

    assert_eq!(
        err,
        AgentError::NoActionableTask {
            quest: "Daily".to_owned()
        }
    );
    assert!(host.calls.is_empty());
}

#[test]
fn encounters_run_the_task_script() {
    let task = farm().combat(|_| Macro::new().attack().repeat());
    let mut host = RecordingHost::new(world_with_turns(10)).fighting(monsters::SCORCHED_ELF);

    engine(1, vec![task]).run(&mut host).unwrap();
    assert_eq!(host.scripts(), ["attack;repeat;"]);
}

#[test]
fn encounters_default_to_the_standard_program() {
    let world = world_with_turns(10);
    let config = config(1);
    let expected = CombatCompiler::new(&world, &config).standard().compile();
    let mut host = RecordingHost::new(world).fighting(monsters::SCORCHED_ELF);

    engine(1, vec![farm()]).run(&mut host).unwrap();
    assert_eq!(host.scripts(), [expected.as_str()]);
}

#[test]
fn chained_choices_are_followed() {
    let task = farm().choice_map(ChoiceMap::from([(1460, 2), (1461, 1)]));
    let mut host = RecordingHost::new(world_with_turns(10))
        .with_outcomes([Outcome::choice(1460), Outcome::choice(1461)]);

    engine(1, vec![task]).run(&mut host).unwrap();
    assert_eq!(
        host.calls,
        [
            Call::Navigate(locations::NOOB_CAVE),
            Call::Choice(1460, 2),
            Call::Choice(1461, 1),
        ]
    );
}

#[test]
fn unanswerable_choice_is_fatal() {
    let mut host =
        RecordingHost::new(world_with_turns(10)).with_outcomes([Outcome::choice(1460)]);
    let err = engine(1, vec![farm()]).run(&mut host).unwrap_err();

    assert_eq!(err.error_code(), "PRECONDITION_UNMET");
}

#[test]
fn choice_chains_are_bounded() {
    let task = farm().choice_map(ChoiceMap::from([(7, 1)]));
    let mut host = RecordingHost::new(world_with_turns(10))
        .with_outcomes(std::iter::repeat_n(Outcome::choice(7), 20));

    let err = engine(1, vec![task]).run(&mut host).unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION_UNMET");
    let resolved = host
        .calls
        .iter()
        .filter(|call| matches!(call, Call::Choice(..)))
        .count();
    assert_eq!(resolved, AgentConfig::MAX_CHOICE_CHAIN);
}

#[test]
fn sobriety_is_checked_again_before_acting() {
    let booze = Usable::Item(ItemId::new("astral pilsner"));
    let drink = booze.clone();
    let task = farm()
        .sobriety(Sobriety::Sober)
        .prepare(move |host| host.actions().use_entity(&drink).map(|_| ()));
    let mut host = RecordingHost::new(world_with_turns(10));
    host.intoxicating = Some(booze);

    let err = engine(1, vec![task]).run(&mut host).unwrap_err();
    assert_eq!(err.error_code(), "PRECONDITION_UNMET");
    assert!(!host.calls.iter().any(|call| matches!(call, Call::Navigate(_))));
}

#[test]
fn equipment_failure_aborts_before_acting() {
    let task = farm().outfit(LoadoutSpec::new().with_slot(
        agent_core::Slot::Weapon,
        items::JUNE_CLEAVER,
    ));
    let mut host = RecordingHost::new(world_with_turns(10));
    host.fail_equipment = true;

    let err = engine(1, vec![task]).run(&mut host).unwrap_err();
    assert_eq!(err.error_code(), "ACTION_FAILED");
    assert!(host.calls.is_empty());
}

#[test]
fn unowned_outfit_aborts_before_acting() {
    let task = farm().outfit(LoadoutSpec::new().with_slot(
        agent_core::Slot::Weapon,
        items::JUNE_CLEAVER,
    ));
    let mut host = RecordingHost::new(world_with_turns(10));

    let err = engine(1, vec![task]).run(&mut host).unwrap_err();
    assert_eq!(err.error_code(), "RESOURCE_UNAVAILABLE");
    assert!(host.calls.is_empty());
    assert_eq!(host.world.equipped(agent_core::Slot::Weapon), None);
}

#[test]
fn missing_effects_are_cast_first() {
    let task = farm()
        .effect(effects::BLOOD_BOND, skills::BLOOD_BOND)
        .effect(effects::EMPATHY, skills::EMPATHY_OF_THE_NEWT);
    let world = world_with_turns(10).with_skill(skills::BLOOD_BOND);
    let mut host = RecordingHost::new(world);

    engine(1, vec![task]).run(&mut host).unwrap();
    assert_eq!(
        host.calls,
        [
            Call::Use(Usable::Skill(skills::BLOOD_BOND)),
            Call::Navigate(locations::NOOB_CAVE),
        ]
    );
}

#[test]
fn report_lists_session_loot() {
    let gem = ItemId::new("gem");
    let mut host = RecordingHost::new(world_with_turns(10));
    host.loot = Some(gem.clone());

    let report = engine(3, vec![farm()]).run(&mut host).unwrap();
    assert_eq!(report.inventory_diff, BTreeMap::from([(gem, 3)]));
    assert!(report.to_string().contains("+3 gem"));
}
