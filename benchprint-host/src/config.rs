//! Host configuration
//!
//! ```toml
//! job_dir = "jobs"
//! job_extension = "gcode"
//!
//! [sim]
//! start_press_at_ms = 100
//! stop_hold_ms = 5500
//!
//! [machine]
//! hold_to_stop_ms = 5000
//! ```
//!
//! Every key is optional. `[[machine.axes]]`, when given, must list all
//! four axes in X, Y, Z, E order.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use benchprint_core::MachineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HostError;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "BENCHPRINT_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "benchprint.toml";

/// Button script and pacing for the simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated time of the start press (ms)
    pub start_press_at_ms: u64,
    /// Length of the start press (ms)
    pub start_press_ms: u64,
    /// Gap between job completion and the stop hold (ms)
    pub stop_after_ms: u64,
    /// Length of the stop hold (ms); shorter than the machine's
    /// `hold_to_stop_ms` leaves the printer running
    pub stop_hold_ms: u64,
    /// Time that passes on every clock read (µs)
    pub clock_tick_us: u64,
    /// Time between quiet polls (ms)
    pub poll_interval_ms: u64,
    /// Give up once simulated time passes this (ms)
    pub run_limit_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_press_at_ms: 100,
            start_press_ms: 200,
            stop_after_ms: 1_000,
            stop_hold_ms: 5_500,
            clock_tick_us: 1_000,
            poll_interval_ms: 10,
            run_limit_ms: 24 * 60 * 60 * 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Directory scanned for job files
    pub job_dir: PathBuf,
    /// Extension a job file must carry, without the dot
    pub job_extension: String,
    pub sim: SimConfig,
    pub machine: MachineConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            job_dir: PathBuf::from("jobs"),
            job_extension: "gcode".to_string(),
            sim: SimConfig::default(),
            machine: MachineConfig::default(),
        }
    }
}

impl HostConfig {
    /// `$BENCHPRINT_CONFIG`, or `benchprint.toml` in the working directory
    pub fn config_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load() -> Result<Self, HostError> {
        Self::load_from(Self::config_path())
    }

    /// Read and validate a configuration file
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let path = path.as_ref();

        let config = match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "Loading configuration");
                Self::from_toml(&text).map_err(|source| HostError::Toml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Configuration file not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(HostError::io(path, e)),
        };

        config.machine.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
