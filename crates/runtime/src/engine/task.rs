//! Tasks and quests.
use agent_core::{
    AgentConfig, EffectId, LocationId, Result, SkillId, Sobriety, Target, Usable, WorldQuery,
};
use macro_tree::Macro;

use crate::api::{ChoiceMap, Host};
use crate::providers::{CombatCompiler, LoadoutOptimizer, LoadoutSpec, WandererSelector};

pub type Predicate = Box<dyn Fn(&dyn WorldQuery) -> bool>;
pub type HostHook = Box<dyn Fn(&mut dyn Host) -> Result<()>>;
pub type TargetPlan = Box<dyn Fn(&TaskContext<'_>) -> Result<Target>>;
pub type LoadoutPlan = Box<dyn Fn(&TaskContext<'_>, &Target) -> Result<LoadoutSpec>>;
pub type CombatPlan = Box<dyn Fn(&CombatCompiler<'_>) -> Macro>;
pub type ChoicePlan = Box<dyn Fn(&TaskContext<'_>) -> ChoiceMap>;

/// Read-only view handed to a task's planning closures.
#[derive(Clone, Copy)]
pub struct TaskContext<'a> {
    pub world: &'a dyn WorldQuery,
    pub wanderer: &'a WandererSelector,
    pub loadout: &'a LoadoutOptimizer,
    pub config: &'a AgentConfig,
}

/// Where a task acts.
pub enum TaskAction {
    Static(Target),
    /// Resolved every cycle, e.g. from the wanderer selector.
    Dynamic(TargetPlan),
}

impl From<Target> for TaskAction {
    fn from(target: Target) -> Self {
        TaskAction::Static(target)
    }
}

impl From<LocationId> for TaskAction {
    fn from(location: LocationId) -> Self {
        TaskAction::Static(Target::Adventure(location))
    }
}

impl From<Usable> for TaskAction {
    fn from(usable: Usable) -> Self {
        TaskAction::Static(Target::Use(usable))
    }
}

/// One unit of work: when it applies, where it acts and how to gear up.
pub struct Task {
    name: String,
    ready: Predicate,
    completed: Predicate,
    sobriety: Sobriety,
    action: TaskAction,
    loadout: Option<LoadoutPlan>,
    combat: Option<CombatPlan>,
    prepare: Option<HostHook>,
    post: Option<HostHook>,
    choices: Option<ChoicePlan>,
    effects: Vec<(EffectId, SkillId)>,
}

impl Task {
    /// Task that is always ready, never completes and accepts any sobriety.
    pub fn new(name: impl Into<String>, action: impl Into<TaskAction>) -> Self {
        Self {
            name: name.into(),
            ready: Box::new(|_| true),
            completed: Box::new(|_| false),
            sobriety: Sobriety::Either,
            action: action.into(),
            loadout: None,
            combat: None,
            prepare: None,
            post: None,
            choices: None,
            effects: Vec::new(),
        }
    }

    /// Task whose target is resolved when it runs.
    pub fn dynamic(
        name: impl Into<String>,
        target: impl Fn(&TaskContext<'_>) -> Result<Target> + 'static,
    ) -> Self {
        Self::new(name, TaskAction::Dynamic(Box::new(target)))
    }

    pub fn ready(mut self, ready: impl Fn(&dyn WorldQuery) -> bool + 'static) -> Self {
        self.ready = Box::new(ready);
        self
    }

    pub fn completed(mut self, completed: impl Fn(&dyn WorldQuery) -> bool + 'static) -> Self {
        self.completed = Box::new(completed);
        self
    }

    pub fn sobriety(mut self, sobriety: Sobriety) -> Self {
        self.sobriety = sobriety;
        self
    }

    pub fn loadout(
        mut self,
        loadout: impl Fn(&TaskContext<'_>, &Target) -> Result<LoadoutSpec> + 'static,
    ) -> Self {
        self.loadout = Some(Box::new(loadout));
        self
    }

    /// Fixed equipment request, passed to the port as is.
    pub fn outfit(self, spec: LoadoutSpec) -> Self {
        self.loadout(move |_, _| Ok(spec.clone()))
    }

    pub fn combat(mut self, combat: impl Fn(&CombatCompiler<'_>) -> Macro + 'static) -> Self {
        self.combat = Some(Box::new(combat));
        self
    }

    pub fn prepare(mut self, prepare: impl Fn(&mut dyn Host) -> Result<()> + 'static) -> Self {
        self.prepare = Some(Box::new(prepare));
        self
    }

    pub fn post(mut self, post: impl Fn(&mut dyn Host) -> Result<()> + 'static) -> Self {
        self.post = Some(Box::new(post));
        self
    }

    pub fn choices(mut self, choices: impl Fn(&TaskContext<'_>) -> ChoiceMap + 'static) -> Self {
        self.choices = Some(Box::new(choices));
        self
    }

    /// Fixed choice decisions.
    pub fn choice_map(self, map: ChoiceMap) -> Self {
        self.choices(move |_| map.clone())
    }

    /// Effect to have active before acting, and the skill that grants it.
    pub fn effect(mut self, effect: EffectId, skill: SkillId) -> Self {
        self.effects.push((effect, skill));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_sobriety(&self) -> Sobriety {
        self.sobriety
    }

    pub fn effects(&self) -> &[(EffectId, SkillId)] {
        &self.effects
    }

    pub fn is_ready(&self, world: &dyn WorldQuery) -> bool {
        (self.ready)(world)
    }

    pub fn is_completed(&self, world: &dyn WorldQuery) -> bool {
        (self.completed)(world)
    }

    pub fn sobriety_admits(&self, world: &dyn WorldQuery) -> bool {
        self.sobriety.admits(world.is_intoxicated())
    }

    /// Ready, not completed and sobriety-compatible.
    pub fn is_admissible(&self, world: &dyn WorldQuery) -> bool {
        self.is_ready(world) && !self.is_completed(world) && self.sobriety_admits(world)
    }

    pub fn resolve_target(&self, ctx: &TaskContext<'_>) -> Result<Target> {
        match &self.action {
            TaskAction::Static(target) => Ok(target.clone()),
            TaskAction::Dynamic(plan) => plan(ctx),
        }
    }

    pub fn plan_loadout(&self, ctx: &TaskContext<'_>, target: &Target) -> Result<Option<LoadoutSpec>> {
        self.loadout
            .as_ref()
            .map(|plan| plan(ctx, target))
            .transpose()
    }

    /// The task's own program, or the standard one.
    pub fn plan_combat(&self, compiler: &CombatCompiler<'_>) -> Macro {
        match &self.combat {
            Some(plan) => plan(compiler),
            None => compiler.standard(),
        }
    }

    pub fn plan_choices(&self, ctx: &TaskContext<'_>) -> ChoiceMap {
        self.choices
            .as_ref()
            .map(|plan| plan(ctx))
            .unwrap_or_default()
    }

    pub fn run_prepare(&self, host: &mut dyn Host) -> Result<()> {
        match &self.prepare {
            Some(hook) => hook(host),
            None => Ok(()),
        }
    }

    pub fn run_post(&self, host: &mut dyn Host) -> Result<()> {
        match &self.post {
            Some(hook) => hook(host),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("sobriety", &self.sobriety)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

/// Named group of tasks. A completed quest hides all of its tasks.
pub struct Quest {
    name: String,
    tasks: Vec<Task>,
    completed: Option<Predicate>,
}

impl std::fmt::Debug for Quest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quest")
            .field("name", &self.name)
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

impl Quest {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
            completed: None,
        }
    }

    pub fn completed(mut self, completed: impl Fn(&dyn WorldQuery) -> bool + 'static) -> Self {
        self.completed = Some(Box::new(completed));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_completed(&self, world: &dyn WorldQuery) -> bool {
        self.completed
            .as_ref()
            .is_some_and(|completed| completed(world))
    }
}

#[cfg(test)]
mod tests {
    use agent_content::locations;
    use agent_core::{Attribute, WorldSnapshot};

    use super::*;

    #[test]
    fn defaults_are_always_admissible() {
        let task = Task::new("idle", Target::Adventure(locations::NOOB_CAVE));
        assert!(task.is_admissible(&WorldSnapshot::new()));
    }

    #[test]
    fn sobriety_gates_admission() {
        let task = Task::new("sober work", Target::Adventure(locations::NOOB_CAVE))
            .sobriety(Sobriety::Sober);
        let drunk = WorldSnapshot::new()
            .with_attribute(Attribute::Inebriety, 20)
            .with_attribute(Attribute::InebrietyLimit, 19);

        assert!(task.is_ready(&drunk));
        assert!(!task.is_admissible(&drunk));
    }

    #[test]
    fn completed_quest_is_reported() {
        let quest = Quest::new("Daily", Vec::new())
            .completed(|world| world.attribute(Attribute::Adventures) == 0);

        assert!(quest.is_completed(&WorldSnapshot::new()));
        assert!(!Quest::new("Open", Vec::new()).is_completed(&WorldSnapshot::new()));
    }
}
