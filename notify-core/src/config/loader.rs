//! TOML configuration loading.
//!
//! [`ConfigLoader`] is a namespace struct. It does not know the shape of the
//! configuration it loads: callers pick the target type, which must implement
//! `Default` so that a missing or empty file still yields a usable value.

use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use tracing::{debug, info};

use super::defaults::CONFIG_FILE_NAME;
use crate::error::{ConfigError, CoreError};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the per-user configuration file, e.g. `~/.config/notify/notify.toml`.
    pub fn default_config_path() -> Result<PathBuf, CoreError> {
        let dirs = ProjectDirs::from("", "", "notify").ok_or_else(|| ConfigError::DirectoryUnavailable {
            dir_type: "configuration".to_string(),
        })?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads and parses `path`.
    ///
    /// A file that does not exist, or contains only whitespace, yields `T::default()`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] when the file exists but cannot be read.
    /// - [`ConfigError::ParseError`] when its contents are not valid for `T`.
    pub fn load_from_path<T>(path: &Path) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Default,
    {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No configuration file at {:?}, using defaults", path);
                return Ok(T::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };
        Self::load_from_str(&content)
    }

    /// Parses TOML text. Blank input yields `T::default()`.
    pub fn load_from_str<T>(content: &str) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Default,
    {
        if content.trim().is_empty() {
            debug!("Configuration source is empty, using defaults");
            return Ok(T::default());
        }
        let parsed = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let config: LoggingConfig = ConfigLoader::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn blank_file_yields_default() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let config: LoggingConfig = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn parses_values_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "level = \"warn\"\nformat = \"json\"").unwrap();
        let config: LoggingConfig = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "json");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result: Result<LoggingConfig, _> = ConfigLoader::load_from_str("level = ");
        assert!(matches!(result, Err(CoreError::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let result: Result<LoggingConfig, _> = ConfigLoader::load_from_path(dir.path());
        assert!(matches!(result, Err(CoreError::Config(ConfigError::ReadError { .. }))));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Ok(path) = ConfigLoader::default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
