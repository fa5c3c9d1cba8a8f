//! Decision providers consulted by the engine each cycle.
//!
//! - [`combat`] compiles the combat script for the coming fight
//! - [`loadout`] picks equipment and a companion
//! - [`wanderer`] picks a location where a wandering opponent can be met
//!
//! Every provider is a pure function of the world view it is handed, so the
//! same snapshot always yields the same decision.
pub mod combat;
pub mod loadout;
pub mod ranking;
pub mod wanderer;

pub use combat::{CombatCompiler, script_digest};
pub use loadout::{EncounterContext, IslandFight, LoadoutOptimizer, LoadoutSpec, orb_worthwhile};
pub use wanderer::{Candidate, DIGITIZE_COUNTDOWN, WandererCategory, WandererSelector};
