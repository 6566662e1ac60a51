// SPDX-License-Identifier: MIT

//! Daemon configuration loaded from a TOML file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {0}: {1}")]
    Unreadable(PathBuf, #[source] std::io::Error),

    #[error("invalid config file {0}: {1}")]
    Invalid(PathBuf, #[source] toml::de::Error),
}

/// Daemon configuration
///
/// ```toml
/// crontab = "/etc/chime/crontab"
/// log = "/var/log/chime.log"
/// tick = "1s"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the crontab file with one job per line
    pub crontab: PathBuf,
    /// Path to the daemon log file; defaults to `chime.log` next to the crontab
    #[serde(default)]
    pub log: Option<PathBuf>,
    /// Tick interval of the dispatch loop
    #[serde(default = "default_tick", with = "humantime_serde")]
    pub tick: Duration,
}

fn default_tick() -> Duration {
    Duration::from_secs(1)
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(path.to_path_buf(), e))?;
        toml::from_str(&content).map_err(|e| ConfigError::Invalid(path.to_path_buf(), e))
    }

    /// The effective log file path
    pub fn log_path(&self) -> PathBuf {
        match &self.log {
            Some(path) => path.clone(),
            None => self.crontab.with_file_name("chime.log"),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
