//! Task scheduling and the run loop.
//!
//! Quests hold ordered [`Task`]s. The [`Engine`] picks the first admissible
//! one each cycle, prepares the actor for it and performs its action through
//! the host ports.
mod report;
mod scheduler;
mod task;

pub use report::{RunReport, StopCondition, StopReason, TaskStatus};
pub use scheduler::{Engine, EngineBuilder};
pub use task::{
    ChoicePlan, CombatPlan, HostHook, LoadoutPlan, Predicate, Quest, Task, TaskAction,
    TaskContext, TargetPlan,
};
