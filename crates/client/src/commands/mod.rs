//! Subcommands.
//!
//! Each command owns its arguments and an `execute` method taking the resolved
//! configuration.

mod compile;
mod plan;
mod run;
mod target;

pub use compile::Compile;
pub use plan::Plan;
pub use run::Run;
pub use target::Target;

use std::path::Path;

use agent_content::WorldLoader;
use agent_core::WorldSnapshot;
use anyhow::{Context, Result};

/// Loads a RON or JSON snapshot merged with the built-in catalog.
fn load_world(path: &Path) -> Result<WorldSnapshot> {
    WorldLoader::load(path).with_context(|| format!("loading world from {}", path.display()))
}
