//! Runtime configuration, read from a RON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use feed_engine::{FaultPolicy, SimulationSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Every field is optional in the file; omitted ones keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_delay_ms: u64,
    pub page_delay_ms: u64,
    pub confirm_delay_ms: u64,
    /// Chance in `0.0..=1.0` that any simulated call fails.
    pub failure_rate: f64,
    /// Directory holding the session slot.
    pub session_dir: PathBuf,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1500,
            page_delay_ms: 800,
            confirm_delay_ms: 500,
            failure_rate: 0.1,
            session_dir: PathBuf::from(".feed"),
            log_destination: LogDestination::Terminal,
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn simulation_settings(&self) -> SimulationSettings {
        let faults = if self.failure_rate <= 0.0 {
            FaultPolicy::Never
        } else if self.failure_rate >= 1.0 {
            FaultPolicy::Always
        } else {
            FaultPolicy::Random {
                failure_rate: self.failure_rate,
            }
        };
        SimulationSettings {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            page_delay: Duration::from_millis(self.page_delay_ms),
            confirm_delay: Duration::from_millis(self.confirm_delay_ms),
            faults,
        }
    }
}
