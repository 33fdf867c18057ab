//! Runner configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings of a simulated sector run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Hard stop for the turn loop.
    pub max_turns: u64,

    /// `tracing` filter directives used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Seed of the dice behind every combat roll.
    pub seed: u64,

    /// Directory with scheme tables, `config.toml` and `maps/`. Built-in
    /// content is used when unset.
    pub data_dir: Option<PathBuf>,

    /// Layout name, looked up as `maps/<map>.ron` in `data_dir`.
    pub map: String,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_TURNS: u64 = 200;
    pub const DEFAULT_SEED: u64 = 0x5EC7_0001;
    pub const DEFAULT_MAP: &'static str = "arena";

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read runtime config {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(content).context("Failed to parse runtime config TOML")?;
        Ok(config)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            log_filter: "info".to_owned(),
            seed: Self::DEFAULT_SEED,
            data_dir: None,
            map: Self::DEFAULT_MAP.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = RuntimeConfig::parse("max_turns = 12\n").unwrap();

        assert_eq!(config.max_turns, 12);
        assert_eq!(config.seed, RuntimeConfig::DEFAULT_SEED);
        assert_eq!(config.map, "arena");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runtime.toml");
        fs::write(
            &path,
            "seed = 7\nlog_filter = \"tactics_core=debug\"\ndata_dir = \"content\"\n",
        )
        .unwrap();

        let config = RuntimeConfig::load(&path).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.log_filter, "tactics_core=debug");
        assert_eq!(config.data_dir, Some(PathBuf::from("content")));
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = RuntimeConfig::load(&path).unwrap_err();

        assert!(err.to_string().contains("absent.toml"));
    }
}
