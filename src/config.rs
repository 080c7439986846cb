//! Runtime configuration for the task tracker.
//!
//! Values come from `TASKDECK_*` environment variables and fall back to
//! defaults suitable for a single user working in the current directory.

use camino::Utf8PathBuf;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the directory that holds the snapshot.
pub const DATA_DIR_VAR: &str = "TASKDECK_DATA_DIR";
/// Environment variable naming the snapshot file inside the data directory.
pub const SNAPSHOT_FILE_VAR: &str = "TASKDECK_SNAPSHOT_FILE";
/// Environment variable holding the due-date check interval in seconds.
pub const MONITOR_INTERVAL_VAR: &str = "TASKDECK_MONITOR_INTERVAL_SECS";

const DEFAULT_DATA_DIR: &str = ".taskdeck";
const DEFAULT_SNAPSHOT_FILE: &str = "tasks.json";
const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(30);

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to an empty or whitespace-only value.
    #[error("{name} must not be empty")]
    Empty {
        /// Variable name.
        name: &'static str,
    },
    /// The snapshot file name contains a path separator.
    #[error("{name} must be a bare file name, got '{value}'")]
    NotAFileName {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
    /// The monitor interval is not a positive whole number of seconds.
    #[error("{name} must be a positive number of seconds, got '{value}'")]
    InvalidInterval {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Tracker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Directory that holds the snapshot file.
    pub data_dir: Utf8PathBuf,
    /// Snapshot file name inside `data_dir`.
    pub snapshot_file: String,
    /// Time between due-date checks in watch mode.
    pub monitor_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_owned(),
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
        }
    }
}

impl TrackerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value when set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(value) => Utf8PathBuf::from(non_empty(DATA_DIR_VAR, &value)?),
            None => defaults.data_dir,
        };
        let snapshot_file = match lookup(SNAPSHOT_FILE_VAR) {
            Some(value) => parse_file_name(&value)?,
            None => defaults.snapshot_file,
        };
        let monitor_interval = match lookup(MONITOR_INTERVAL_VAR) {
            Some(value) => parse_interval(&value)?,
            None => defaults.monitor_interval,
        };

        Ok(Self {
            data_dir,
            snapshot_file,
            monitor_interval,
        })
    }

    /// Returns the full path of the snapshot file.
    #[must_use]
    pub fn snapshot_path(&self) -> Utf8PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }
}

fn non_empty<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { name });
    }
    Ok(trimmed)
}

fn parse_file_name(value: &str) -> Result<String, ConfigError> {
    let trimmed = non_empty(SNAPSHOT_FILE_VAR, value)?;
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(ConfigError::NotAFileName {
            name: SNAPSHOT_FILE_VAR,
            value: value.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_interval(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidInterval {
        name: MONITOR_INTERVAL_VAR,
        value: value.to_owned(),
    };
    let secs: u64 = value.trim().parse().map_err(|_| invalid())?;
    if secs == 0 {
        return Err(invalid());
    }
    Ok(Duration::from_secs(secs))
}
