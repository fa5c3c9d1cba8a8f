//! Decision core for the turn-based automation agent.
//!
//! This crate decides what the actor does with each turn. It owns no game
//! connection: every read goes through [`agent_core::WorldQuery`] and every
//! write through the ports bundled in [`Host`]. Consumers build an [`Engine`]
//! from quests and call [`Engine::run`] with a host.
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts tasks, quests and the run loop
//! - [`api`] exposes the port traits hosts implement
//! - [`providers`] compiles combat scripts, picks loadouts and chooses
//!   encounter targets
//! - [`quests`] ships the built-in quests
pub mod api;
pub mod engine;
pub mod providers;
pub mod quests;

pub use api::{
    ActionPort, AgentError, ChoiceMap, EquipmentPort, ErrorSeverity, Host, Outcome, Result,
    ScriptInterpreter,
};
pub use engine::{
    Engine, EngineBuilder, Quest, RunReport, StopCondition, StopReason, Task, TaskAction,
    TaskContext, TaskStatus,
};
pub use providers::{
    Candidate, CombatCompiler, EncounterContext, IslandFight, LoadoutOptimizer, LoadoutSpec,
    WandererCategory, WandererSelector, script_digest,
};
pub use quests::standard_quests;
