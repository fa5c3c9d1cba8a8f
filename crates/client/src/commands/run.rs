//! Dry-run command.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtime::{Engine, standard_quests};
use sortie::{ClientConfig, DryRunHost};

use super::load_world;

/// Dry-run the quests against a world snapshot
#[derive(Parser, Debug)]
pub struct Run {
    /// World snapshot (.ron or .json)
    pub world: PathBuf,

    /// Print every host call
    #[arg(short, long)]
    pub verbose: bool,
}

impl Run {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let world = load_world(&self.world)?;
        let engine = Engine::builder(config.agent.clone())
            .quests(standard_quests(&world, &config.agent))
            .build();
        let mut host = DryRunHost::new(world);

        tracing::info!(session = %config.session_id, budget = ?config.agent.budget(), "dry run started");
        let result = engine.run(&mut host);

        if self.verbose {
            for line in host.journal() {
                println!("  {line}");
            }
        }

        let report = result?;
        print!("{report}");
        Ok(())
    }
}
