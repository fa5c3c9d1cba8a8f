//! sortie client binary.
//!
//! Plans and dry-runs the decision core against world snapshot files.
//!
//! # Examples
//!
//! ```bash
//! # Play 20 turns against a snapshot and print the session report
//! sortie --turns 20 run world.ron
//!
//! # Show which task each quest would pick next
//! sortie --config agent.toml plan world.json
//!
//! # Print the hard combat script
//! sortie compile hard world.ron
//! ```

mod commands;

use std::path::PathBuf;

use agent_core::Zone;
use anyhow::Result;
use clap::Parser;
use commands::{Compile, Plan, Run, Target};
use sortie::{ClientConfig, logging};

/// Plan and dry-run turn automation
#[derive(Parser)]
#[command(name = "sortie")]
#[command(about = "Plan and dry-run turn automation", long_about = None)]
#[command(version)]
struct Cli {
    /// Agent configuration TOML
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Turns to play; zero or negative keeps that many in reserve
    #[arg(long, global = true, allow_hyphen_values = true)]
    turns: Option<i64>,

    /// Content to farm after the global tasks
    #[arg(long, global = true)]
    zone: Option<Zone>,

    /// Island to farm
    #[arg(long, global = true)]
    island: Option<String>,

    /// Meat value of one turn
    #[arg(long, global = true)]
    value_of_adventure: Option<f64>,

    /// Session identifier for the log directory
    #[arg(long, global = true)]
    session_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Dry-run the quests against a world snapshot
    Run(Run),

    /// Print the state of every task
    Plan(Plan),

    /// Compile a combat program
    Compile(Compile),

    /// Pick an encounter location for a category
    Target(Target),
}

impl Cli {
    /// Flags win over file and environment.
    fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(turns) = self.turns {
            config.agent.turns = turns;
        }
        if let Some(zone) = self.zone {
            config.agent.zone = zone;
        }
        if let Some(island) = &self.island {
            config.agent.island = Some(island.clone());
        }
        if let Some(value) = self.value_of_adventure {
            config.agent.value_of_adventure = value.max(0.0);
        }
        if let Some(session_id) = &self.session_id {
            config.session_id = session_id.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let _guard = logging::setup_logging(&config)?;

    tracing::debug!(
        turns = config.agent.turns,
        zone = %config.agent.zone,
        island = config.agent.island.as_deref(),
        "configuration resolved"
    );

    match cli.command {
        Command::Run(cmd) => cmd.execute(&config),
        Command::Plan(cmd) => cmd.execute(&config),
        Command::Compile(cmd) => cmd.execute(&config),
        Command::Target(cmd) => cmd.execute(&config),
    }
}
