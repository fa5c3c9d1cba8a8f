//! Agent configuration loader.

use std::path::Path;

use agent_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`AgentConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Zone;
    use std::io::Write;

    #[test]
    fn partial_files_keep_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "turns = 40\nzone = \"cafe\"\nsniff_target = \"Elf Guard engineer\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.turns, 40);
        assert_eq!(config.zone, Zone::Cafe);
        assert_eq!(config.sniff_target.as_deref(), Some("Elf Guard engineer"));
        assert_eq!(config.value_of_adventure, AgentConfig::DEFAULT_VALUE_OF_ADVENTURE);
    }

    #[test]
    fn rejects_unknown_zone() {
        assert!(ConfigLoader::parse("zone = \"moon\"").is_err());
    }
}
