//! TOML-based application configuration.
//!
//! Stores the recorded cycle start and the cycle length, plus display
//! preferences. Stored at `~/.config/lunara/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::cycle::DEFAULT_CYCLE_LENGTH;
use crate::error::{ConfigError, Result};

/// Cycle-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Most recent recorded period start. `None` until the user records one.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default = "default_cycle_length")]
    pub length: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lunara/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cycle: CycleConfig,
}

fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            start: None,
            length: default_cycle_length(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk; a missing file seeds and returns the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk. Only
    /// a missing file falls back to defaults -- overwriting on any read
    /// failure would lose a recorded cycle start.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a config value as a display string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "cycle.start" => Some(
                self.cycle
                    .start
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "unset".to_string()),
            ),
            "cycle.length" => Some(self.cycle.length.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cycle.start" => {
                self.cycle.start =
                    Some(
                        value
                            .parse::<NaiveDate>()
                            .map_err(|_| ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("'{value}' is not a YYYY-MM-DD date"),
                            })?,
                    );
            }
            "cycle.length" => {
                let length: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a positive integer"),
                })?;
                if length == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "cycle length must be at least 1".to_string(),
                    }
                    .into());
                }
                self.cycle.length = length;
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "unknown config key".to_string(),
                }
                .into())
            }
        }
        self.save()?;
        Ok(())
    }
}
