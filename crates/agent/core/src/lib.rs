//! Shared vocabulary for the turn-based automation agent.
//!
//! `agent-core` defines the identifiers, equipment slots, character attributes
//! and the read-only [`WorldQuery`] port that every decision subsystem consults.
//! It also hosts [`WorldSnapshot`], the in-memory world used by the dry-run
//! host and by tests, plus the crate-wide [`AgentError`] and [`AgentConfig`].
pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod slot;
pub mod stats;
pub mod world;

pub use config::{AgentConfig, TurnBudget, Zone};
pub use entity::{Entity, Target, Usable};
pub use error::{AgentError, ErrorSeverity, Result};
pub use ids::{CompanionId, EffectId, ItemId, LocationId, MonsterId, SkillId};
pub use slot::{ItemType, Slot};
pub use stats::{Attribute, CharacterClass, Sobriety, Stat};
pub use world::{
    CapabilityPort, Catalog, ItemDrop, ItemInfo, LocationInfo, MonsterInfo, Phylum, WorldQuery,
    WorldSnapshot,
};
