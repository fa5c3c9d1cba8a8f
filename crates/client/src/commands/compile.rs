//! Combat program compilation.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use runtime::{CombatCompiler, script_digest};
use sortie::ClientConfig;

use super::load_world;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Program {
    /// Cheap, repeatable resources
    Standard,
    /// Expensive resources for opponents that must die
    Hard,
}

/// Compile a combat program
#[derive(Parser, Debug)]
pub struct Compile {
    #[arg(value_enum)]
    pub program: Program,

    /// World snapshot (.ron or .json)
    pub world: PathBuf,
}

impl Compile {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let world = load_world(&self.world)?;
        let compiler = CombatCompiler::new(&world, &config.agent);
        let script = match self.program {
            Program::Standard => compiler.standard(),
            Program::Hard => compiler.hard(),
        }
        .compile();

        println!("{}", script.as_str());
        println!("digest: {}", script_digest(&script));
        Ok(())
    }
}
