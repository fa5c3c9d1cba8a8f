//! Combat script compilation.
//!
//! [`CombatCompiler`] turns the current world into a [`Macro`] for the coming
//! fight. Facts known before the fight (owned items, known skills, counters)
//! are decided here with [`Macro::external_if`]; facts only the interpreter
//! can see (the opponent, remaining charges) become live guards.
//!
//! Fragments are small methods that each return a [`Macro`]; the programs in
//! [`programs`] splice them together in priority order.
mod fragments;
mod programs;

use agent_core::{AgentConfig, WorldQuery};
use macro_tree::Script;
use sha2::{Digest, Sha256};

/// Builds combat programs against one world view.
#[derive(Clone, Copy)]
pub struct CombatCompiler<'a> {
    world: &'a dyn WorldQuery,
    config: &'a AgentConfig,
}

impl<'a> CombatCompiler<'a> {
    pub fn new(world: &'a dyn WorldQuery, config: &'a AgentConfig) -> Self {
        Self { world, config }
    }

    pub fn world(&self) -> &'a dyn WorldQuery {
        self.world
    }

    pub fn config(&self) -> &'a AgentConfig {
        self.config
    }
}

/// Hex-encoded SHA-256 of the script text.
///
/// Logged next to every executed script so two runs can be compared without
/// dumping whole scripts.
pub fn script_digest(script: &Script) -> String {
    hex::encode(Sha256::digest(script.as_str().as_bytes()))
}

pub use fragments::should_redigitize;
pub(crate) use fragments::{
    DIGITIZE_MONSTER, DIGITIZE_MONSTER_COUNT, VOID_FREE_FIGHT_LIMIT, VOID_FREE_FIGHTS,
    VOTE_FREE_FIGHT_LIMIT, VOTE_FREE_FIGHTS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use macro_tree::Macro;

    #[test]
    fn digest_tracks_script_text() {
        let a = Macro::new().attack().repeat().compile();
        let b = Macro::new().attack().repeat().compile();
        let c = Macro::new().abort().compile();

        assert_eq!(script_digest(&a), script_digest(&b));
        assert_ne!(script_digest(&a), script_digest(&c));
        assert_eq!(script_digest(&a).len(), 64);
    }
}
