//! The run loop.
use agent_core::{
    AgentConfig, AgentError, CapabilityPort, Result, Target, Usable, WorldQuery,
};
use tracing::{debug, error, info};

use super::report::{RunReport, StopCondition, StopReason, TaskStatus};
use super::task::{Quest, Task, TaskContext};
use crate::api::{ChoiceMap, Host, Outcome};
use crate::providers::{CombatCompiler, LoadoutOptimizer, WandererSelector, script_digest};

/// Runs quests one cycle at a time against a [`Host`].
///
/// Each cycle picks the first admissible task across all quests in
/// declaration order, gears up for it, acts once and follows up on whatever
/// the host reports. The engine keeps no state between cycles besides the
/// wanderer selector's repeat memory; every predicate is re-evaluated against
/// the live world.
pub struct Engine {
    quests: Vec<Quest>,
    config: AgentConfig,
    loadout: LoadoutOptimizer,
    wanderer: WandererSelector,
}

impl Engine {
    pub fn builder(config: AgentConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn loadout(&self) -> &LoadoutOptimizer {
        &self.loadout
    }

    pub fn wanderer(&self) -> &WandererSelector {
        &self.wanderer
    }

    pub fn context<'a>(&'a self, world: &'a dyn WorldQuery) -> TaskContext<'a> {
        TaskContext {
            world,
            wanderer: &self.wanderer,
            loadout: &self.loadout,
            config: &self.config,
        }
    }

    /// Whether every quest reports itself completed.
    pub fn is_completed(&self, world: &dyn WorldQuery) -> bool {
        self.quests.iter().all(|quest| quest.is_completed(world))
    }

    /// First admissible task of the first open quest that has one.
    pub fn next_task(&self, world: &dyn WorldQuery) -> Result<(&Quest, &Task)> {
        let open = || self.quests.iter().filter(move |quest| !quest.is_completed(world));

        open()
            .flat_map(|quest| quest.tasks().iter().map(move |task| (quest, task)))
            .find(|(_, task)| task.is_admissible(world))
            .ok_or_else(|| AgentError::NoActionableTask {
                quest: open().map(Quest::name).collect::<Vec<_>>().join(", "),
            })
    }

    /// State of every task, in scheduling order.
    pub fn describe(&self, world: &dyn WorldQuery) -> Vec<TaskStatus> {
        self.quests
            .iter()
            .flat_map(|quest| {
                let quest_done = quest.is_completed(world);
                quest.tasks().iter().map(move |task| {
                    let completed = quest_done || task.is_completed(world);
                    TaskStatus {
                        quest: quest.name().to_owned(),
                        task: task.name().to_owned(),
                        ready: task.is_ready(world),
                        completed,
                        sobriety: task.required_sobriety(),
                        admissible: !quest_done && task.is_admissible(world),
                    }
                })
            })
            .collect()
    }

    /// Runs cycles until the turn budget is spent or every quest completes.
    ///
    /// The first failing cycle ends the run; its error is returned as is.
    pub fn run(&self, host: &mut dyn Host) -> Result<RunReport> {
        let stop = StopCondition::new(self.config.budget(), host.world());
        let before = host.world().inventory();
        let mut report = RunReport::default();

        info!(
            target: "runtime::engine",
            quests = self.quests.len(),
            budget = ?self.config.budget(),
            "run started"
        );

        loop {
            let world = host.world();
            let reason = if self.is_completed(world) {
                Some(StopReason::QuestsCompleted)
            } else {
                stop.reached(world)
            };
            if let Some(reason) = reason {
                report.close(reason, &before, &world.inventory());
                info!(
                    target: "runtime::engine",
                    cycles = report.cycles,
                    reason = %reason,
                    "run finished"
                );
                return Ok(report);
            }

            let cycle = report.cycles + 1;
            let (quest, task) = self.next_task(world).inspect_err(|err| {
                log_failure(cycle, "", err);
            })?;

            info!(
                target: "runtime::engine",
                cycle,
                quest = quest.name(),
                task = task.name(),
                "executing task"
            );
            self.execute(task, host)
                .inspect_err(|err| log_failure(cycle, task.name(), err))?;
            report.record(task.name());
        }
    }

    fn execute(&self, task: &Task, host: &mut dyn Host) -> Result<()> {
        acquire_effects(task, host)?;
        task.run_prepare(host)?;

        let (target, loadout) = {
            let ctx = self.context(host.world());
            let target = task.resolve_target(&ctx)?;
            let loadout = task.plan_loadout(&ctx, &target)?;
            (target, loadout)
        };
        if let Some(loadout) = &loadout {
            host.equipment().apply(loadout)?;
        }

        let (script, choices) = {
            let world = host.world();
            let compiler = CombatCompiler::new(world, &self.config);
            let script = task.plan_combat(&compiler).compile();
            (script, task.plan_choices(&self.context(world)))
        };

        if !task.sobriety_admits(host.world()) {
            return Err(AgentError::precondition(
                task.name(),
                format!("sobriety no longer {}", task.required_sobriety()),
            ));
        }

        debug!(target: "runtime::engine", task = task.name(), action = %target, "acting");
        let outcome = match &target {
            Target::Adventure(location) => host.actions().navigate(location)?,
            Target::Use(usable) => host.actions().use_entity(usable)?,
        };
        let outcome = follow_choices(task, host, &choices, outcome)?;

        if let Some(monster) = &outcome.encounter {
            debug!(
                target: "runtime::combat",
                task = task.name(),
                monster = %monster,
                digest = %script_digest(&script),
                "executing script"
            );
            host.interpreter().execute(&script)?;
        }

        task.run_post(host)
    }
}

/// Casts the skill behind every effect the task wants but lacks.
///
/// Effects whose skill the actor does not know are skipped.
fn acquire_effects(task: &Task, host: &mut dyn Host) -> Result<()> {
    for (effect, skill) in task.effects() {
        let world = host.world();
        if world.has_effect(effect) || !world.knows_skill(skill) {
            continue;
        }
        debug!(target: "runtime::engine", effect = %effect, skill = %skill, "acquiring effect");
        host.actions().use_entity(&Usable::Skill(skill.clone()))?;
    }
    Ok(())
}

/// Answers chained choice adventures until the host stops asking.
fn follow_choices(
    task: &Task,
    host: &mut dyn Host,
    choices: &ChoiceMap,
    mut outcome: Outcome,
) -> Result<Outcome> {
    let mut followed = 0;
    while let Some(choice) = outcome.pending_choice {
        if followed == AgentConfig::MAX_CHOICE_CHAIN {
            return Err(AgentError::precondition(
                task.name(),
                format!("more than {followed} chained choices"),
            ));
        }
        let decision = choices.get(&choice).copied().ok_or_else(|| {
            AgentError::precondition(task.name(), format!("no decision for choice {choice}"))
        })?;
        debug!(target: "runtime::engine", choice, decision, "resolving choice");
        outcome = host.actions().resolve_choice(choice, decision)?;
        followed += 1;
    }
    Ok(outcome)
}

fn log_failure(cycle: u64, task: &str, err: &AgentError) {
    error!(
        target: "runtime::engine",
        cycle,
        task,
        error = %err,
        code = err.error_code(),
        severity = err.severity().as_str(),
        "run aborted"
    );
}

/// Builder for [`Engine`].
pub struct EngineBuilder {
    config: AgentConfig,
    quests: Vec<Quest>,
    loadout: Option<LoadoutOptimizer>,
    wanderer: Option<WandererSelector>,
}

impl EngineBuilder {
    fn new(config: AgentConfig) -> Self {
        Self {
            config,
            quests: Vec::new(),
            loadout: None,
            wanderer: None,
        }
    }

    /// Appends a quest; quests run in the order they are added.
    pub fn quest(mut self, quest: Quest) -> Self {
        self.quests.push(quest);
        self
    }

    pub fn quests(mut self, quests: impl IntoIterator<Item = Quest>) -> Self {
        self.quests.extend(quests);
        self
    }

    /// Replaces the standard optimizer.
    pub fn loadout(mut self, loadout: LoadoutOptimizer) -> Self {
        self.loadout = Some(loadout);
        self
    }

    /// Replaces the standard selector.
    pub fn wanderer(mut self, wanderer: WandererSelector) -> Self {
        self.wanderer = Some(wanderer);
        self
    }

    pub fn build(self) -> Engine {
        let loadout = self
            .loadout
            .unwrap_or_else(|| LoadoutOptimizer::standard(&self.config));
        let wanderer = self
            .wanderer
            .unwrap_or_else(|| WandererSelector::standard(&self.config));
        Engine {
            quests: self.quests,
            config: self.config,
            loadout,
            wanderer,
        }
    }
}
