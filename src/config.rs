//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::{EngineSettings, FirstMove};
use tracing::{debug, info, instrument};

/// Default file name for `init-config`.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// User-facing configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name shown for the first seat.
    #[serde(default = "default_first_player_name")]
    first_player_name: String,

    /// Name shown for the second human.
    #[serde(default = "default_second_player_name")]
    second_player_name: String,

    /// Name shown for the computer opponent.
    #[serde(default = "default_cpu_name")]
    cpu_name: String,

    /// Milliseconds the computer waits before moving.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Who opens single-player rounds (random, human, or computer).
    #[serde(default)]
    first_move: FirstMove,

    /// Log file written while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_first_player_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_second_player_name() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_cpu_name() -> String {
    "CPU".to_string()
}

#[instrument]
fn default_cpu_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_player_name: default_first_player_name(),
            second_player_name: default_second_player_name(),
            cpu_name: default_cpu_name(),
            cpu_delay_ms: default_cpu_delay_ms(),
            first_move: FirstMove::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(cpu_name = %config.cpu_name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when given, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serializes this configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Writes this configuration to `path`.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write_to(&self, path: impl AsRef<Path>, force: bool) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(ConfigError::new(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::new(format!("Failed to write config file: {}", e)))?;
        info!("Config written");
        Ok(())
    }

    /// Replaces the computer delay.
    pub fn set_cpu_delay_ms(&mut self, millis: u64) {
        self.cpu_delay_ms = millis;
    }

    /// Computer delay as a duration.
    pub fn cpu_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_delay_ms)
    }

    /// Builds engine settings from this configuration.
    #[instrument(skip(self))]
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::default()
            .with_first_player_name(self.first_player_name.clone())
            .with_second_player_name(self.second_player_name.clone())
            .with_cpu_name(self.cpu_name.clone())
            .with_cpu_delay(self.cpu_delay())
            .with_first_move(self.first_move)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
