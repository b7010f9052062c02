//! Configuration for the demo driver.
//!
//! Supports YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;

/// Values the reference walkthrough starts from.
const DEFAULT_VALUES: [i64; 6] = [72, 101, 108, 109, 110, 111];
const DEFAULT_REMOVE: i64 = 101;

/// Demo driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Initial list contents, head first.
    pub values: Vec<i64>,
    /// Value whose first occurrence is removed after the shuffle.
    pub remove: i64,
    /// Shuffle seed. Uses the thread-local generator when absent.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            remove: DEFAULT_REMOVE,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("SLLIST_CONFIG").unwrap_or_else(|_| "sllist.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(seed) = std::env::var("SLLIST_SEED") {
            if let Ok(s) = seed.parse() {
                self.seed = Some(s);
            }
        }

        if let Ok(remove) = std::env::var("SLLIST_REMOVE") {
            if let Ok(r) = remove.parse() {
                self.remove = r;
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
