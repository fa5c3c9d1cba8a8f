//! Encounter target selection.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtime::{WandererCategory, WandererSelector};
use sortie::ClientConfig;

use super::load_world;

/// Pick an encounter location for a category
#[derive(Parser, Debug)]
pub struct Target {
    /// wanderer, backup, yellow_ray, free_fight or free_run
    pub category: WandererCategory,

    /// World snapshot (.ron or .json)
    pub world: PathBuf,
}

impl Target {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let world = load_world(&self.world)?;
        let selector = WandererSelector::standard(&config.agent);

        let location = selector.get_target(&world, self.category);
        println!("{}: {location}", self.category);
        for (choice, decision) in selector.get_choices(&world, self.category) {
            println!("  choice {choice}: option {decision}");
        }
        Ok(())
    }
}
