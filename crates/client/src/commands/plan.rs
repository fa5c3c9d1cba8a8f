//! Task state listing.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtime::{Engine, standard_quests};
use sortie::ClientConfig;

use super::load_world;

/// Print the state of every task
#[derive(Parser, Debug)]
pub struct Plan {
    /// World snapshot (.ron or .json)
    pub world: PathBuf,
}

impl Plan {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let world = load_world(&self.world)?;
        let engine = Engine::builder(config.agent.clone())
            .quests(standard_quests(&world, &config.agent))
            .build();

        for status in engine.describe(&world) {
            println!("{status}");
        }

        match engine.next_task(&world) {
            Ok((quest, task)) => println!("next: {} / {}", quest.name(), task.name()),
            Err(err) => println!("next: none ({err})"),
        }
        Ok(())
    }
}
