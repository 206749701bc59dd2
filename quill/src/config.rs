//! Server configuration, stored as JSON5.
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default location of the configuration file.
pub const CONFIG_PATH: &str = "config/quill_config.json5";

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access configuration file '{path}': {source}")]
    Io {
        /// The underlying io error.
        source: io::Error,
        /// The configuration path.
        path: String,
    },
    /// The file is not valid JSON5 for this config.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The defaults could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The log level is not one of off, error, warn, info, debug or trace.
    #[error("Unknown log level: {0}")]
    LogLevel(String),
}

/// The server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuillConfig {
    /// How verbose the console log is.
    pub log_level: String,
    /// Builtin commands that are removed at startup.
    pub disabled_commands: Vec<String>,
    /// Shown for unknown commands, `{label}` is replaced by what was typed.
    pub unknown_command_message: String,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            disabled_commands: Vec::new(),
            unknown_command_message: "Unknown command: {label}".into(),
        }
    }
}

impl QuillConfig {
    /// Loads the config at `path`, writing the defaults there first if it
    /// does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            source,
            path: path.display().to_string(),
        };

        if !path.exists() {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            fs::write(path, serde_json::to_string_pretty(&config)?).map_err(io_error)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(io_error)?;
        Ok(serde_json5::from_str(&content)?)
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// The message for an unknown command typed as `label`.
    #[must_use]
    pub fn unknown_command(&self, label: &str) -> String {
        self.unknown_command_message.replace("{label}", label)
    }
}
