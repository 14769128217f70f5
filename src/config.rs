use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
}

/// Defaults for the entry sequence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Name passed to the greeting step
    #[serde(default = "default_name")]
    pub name: String,

    /// Exclusive upper bound for the accumulator step
    #[serde(default = "default_bound")]
    pub bound: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            bound: default_bound(),
        }
    }
}

// Default value functions for serde
fn default_name() -> String {
    "world".to_string()
}

fn default_bound() -> i64 {
    10
}

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Path::new("config.yaml");

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}
