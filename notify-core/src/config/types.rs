//! Configuration data structures for the core layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;
use crate::error::ConfigError;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["text", "json"];

/// Settings for the logging subsystem.
///
/// ```
/// use notify_core::config::LoggingConfig;
///
/// let config: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.file_path, None);
/// assert_eq!(config.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Rolled daily when set.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Lowercases level and format and rejects values the logging layer does not know.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.level = self.level.trim().to_lowercase();
        self.format = self.format.trim().to_lowercase();

        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level '{}'. Expected one of {:?}",
                self.level, VALID_LEVELS
            )));
        }
        if !VALID_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format '{}'. Expected one of {:?}",
                self.format, VALID_FORMATS
            )));
        }
        Ok(self)
    }
}
