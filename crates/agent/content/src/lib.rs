//! Static content and loaders for the automation agent.
//!
//! This crate houses the data the decision core refers to by name:
//! - Entity names (items, skills, companions, effects, locations, opponents)
//! - Holiday island definitions
//! - The built-in catalog of item kinds, values and opponent phyla
//! - Loaders for world snapshots (RON/JSON) and agent configuration (TOML)
//!
//! Content is consumed by the runtime providers and never mutated.

pub mod catalog;
pub mod islands;
pub mod names;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::default_catalog;
pub use islands::{ISLANDS, Island, island};
pub use names::{HOLIDAY_ISLANDS, companions, effects, items, locations, monsters, skills};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, WorldLoader};
