//! Client configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use agent_content::ConfigLoader;
use agent_core::{AgentConfig, Zone};
use anyhow::Result;

/// Everything the binary needs before it can build an engine.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub agent: AgentConfig,
    /// Names the session log directory.
    pub session_id: String,
    /// Log directory; the platform cache directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(agent: AgentConfig) -> Self {
        Self {
            agent,
            session_id: new_session_id(),
            log_dir: None,
        }
    }

    /// Defaults, overlaid by the TOML file at `path` when given, then by the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let agent = match path {
            Some(path) => ConfigLoader::load(path)?,
            None => AgentConfig::default(),
        };
        Ok(Self::new(agent).with_env())
    }

    /// Overlay of the process environment.
    pub fn with_env(mut self) -> Self {
        self.apply_env(|key| env::var(key).ok());
        self
    }

    /// Overlay of environment variables read through `lookup`.
    ///
    /// Environment variables:
    /// - `SORTIE_TURNS` - Turn budget, negative values keep a reserve
    /// - `SORTIE_VALUE_OF_ADVENTURE` - Meat value of one turn
    /// - `SORTIE_SHRUB` - Bring the shrub for its gift (bare variable means true)
    /// - `SORTIE_ZONE` - `cafe` or `island`
    /// - `SORTIE_ISLAND` - Island to farm
    /// - `SORTIE_SNIFF_TARGET` - Opponent to mark for repeats
    /// - `SORTIE_ORB_TARGET` - Opponent the crystal orb should predict
    /// - `SORTIE_SESSION_ID` - Session identifier (default: timestamp)
    /// - `SORTIE_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let agent = &mut self.agent;

        if let Some(turns) = read_env::<i64>(&lookup, "SORTIE_TURNS") {
            agent.turns = turns;
        }
        if let Some(value) = read_env::<f64>(&lookup, "SORTIE_VALUE_OF_ADVENTURE") {
            agent.value_of_adventure = value.max(0.0);
        }

        if let Some(shrub) = read_env::<bool>(&lookup, "SORTIE_SHRUB") {
            agent.shrub = shrub;
        } else if lookup("SORTIE_SHRUB").is_some() {
            agent.shrub = true;
        }

        if let Some(zone) = read_env::<Zone>(&lookup, "SORTIE_ZONE") {
            agent.zone = zone;
        }
        if let Some(island) = lookup("SORTIE_ISLAND") {
            agent.island = Some(island);
        }
        if let Some(target) = lookup("SORTIE_SNIFF_TARGET") {
            agent.sniff_target = Some(target);
        }
        if let Some(target) = lookup("SORTIE_ORB_TARGET") {
            agent.orb_target = Some(target);
        }

        if let Some(session_id) = lookup("SORTIE_SESSION_ID") {
            self.session_id = session_id;
        }
        if let Some(dir) = lookup("SORTIE_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(dir));
        }
    }
}

/// Timestamped identifier for a new session.
pub fn new_session_id() -> String {
    format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn overlay(config: &mut ClientConfig, vars: &[(&str, &str)]) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config.apply_env(|key| vars.get(key).cloned());
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut config = ClientConfig::new(AgentConfig::default());
        overlay(
            &mut config,
            &[
                ("SORTIE_TURNS", "-20"),
                ("SORTIE_ZONE", "Cafe"),
                ("SORTIE_ISLAND", "Smoldering Bone Spikes"),
                ("SORTIE_SESSION_ID", "night"),
            ],
        );

        assert_eq!(config.agent.turns, -20);
        assert_eq!(config.agent.zone, Zone::Cafe);
        assert_eq!(config.agent.island.as_deref(), Some("Smoldering Bone Spikes"));
        assert_eq!(config.session_id, "night");
        assert_eq!(
            config.agent.value_of_adventure,
            AgentConfig::DEFAULT_VALUE_OF_ADVENTURE
        );
    }

    #[test]
    fn malformed_values_are_ignored() {
        let mut config = ClientConfig::new(AgentConfig::default());
        overlay(
            &mut config,
            &[("SORTIE_TURNS", "many"), ("SORTIE_ZONE", "moon")],
        );

        assert_eq!(config.agent.turns, AgentConfig::DEFAULT_TURNS);
        assert_eq!(config.agent.zone, Zone::Island);
    }

    #[test]
    fn bare_shrub_variable_enables_it() {
        let mut config = ClientConfig::new(AgentConfig::default());
        overlay(&mut config, &[("SORTIE_SHRUB", "")]);
        assert!(config.agent.shrub);

        overlay(&mut config, &[("SORTIE_SHRUB", "false")]);
        assert!(!config.agent.shrub);
    }

    #[test]
    fn environment_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "turns = 40\nvalue_of_adventure = 4500.0").unwrap();

        let mut config = ClientConfig::new(ConfigLoader::load(file.path()).unwrap());
        overlay(&mut config, &[("SORTIE_TURNS", "12")]);

        assert_eq!(config.agent.turns, 12);
        assert_eq!(config.agent.value_of_adventure, 4_500.0);
    }

    #[test]
    fn session_ids_carry_a_timestamp() {
        let id = new_session_id();
        assert!(id.starts_with("session_"));
        assert_eq!(id.len(), "session_20260101_000000".len());
    }
}
