//! Defaults applied to every notification created through a [`crate::Notify`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use notify_core::{ConfigError, ConfigLoader, CoreError, LoggingConfig};

use crate::notification::{Alerts, Header, Progress};

/// Loaded once and handed to [`crate::Notify::new`].
///
/// ```toml
/// [header]
/// color = 0x3D3D3D
///
/// [alerting]
/// channel_key = "chat"
/// channel_importance = "high"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyConfig {
    pub logging: LoggingConfig,
    pub header: Header,
    pub alerting: Alerts,
    pub progress: Progress,
}

impl NotifyConfig {
    /// Reads `notify.toml` from the user's configuration directory.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from_path(&ConfigLoader::default_config_path()?)
    }

    /// Missing files yield the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        debug!("Loading Notify configuration from {:?}", path);
        ConfigLoader::load_from_path::<NotifyConfig>(path)?.validated()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        ConfigLoader::load_from_str::<NotifyConfig>(content)?.validated()
    }

    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.logging = self.logging.validated()?;
        if self.alerting.channel_key.trim().is_empty() {
            return Err(ConfigError::ValidationError("alerting.channel_key must not be empty".to_string()).into());
        }
        if self.progress.progress_percent > 100 {
            return Err(ConfigError::ValidationError(format!(
                "progress.progress_percent must be at most 100, got {}",
                self.progress.progress_percent
            ))
            .into());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Importance;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(NotifyConfig::from_toml_str("").unwrap(), NotifyConfig::default());
    }

    #[test]
    fn partial_tables_fill_in_defaults() {
        let config = NotifyConfig::from_toml_str(
            r#"
            [logging]
            level = "DEBUG"

            [alerting]
            channel_key = "chat"
            channel_importance = "high"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.alerting.channel_key, "chat");
        assert_eq!(config.alerting.channel_importance, Importance::High);
        assert_eq!(config.alerting.channel_name, "Application notifications.");
        assert_eq!(config.header, Header::default());
    }

    #[test]
    fn blank_channel_key_is_rejected() {
        let err = NotifyConfig::from_toml_str("[alerting]\nchannel_key = \" \"").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = NotifyConfig::from_toml_str("[alerting]\nvolume = 11").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[progress]\nshow_progress = true\nprogress_percent = 30").unwrap();

        let config = NotifyConfig::load_from_path(file.path()).unwrap();
        assert!(config.progress.show_progress);
        assert_eq!(config.progress.progress_percent, 30);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NotifyConfig::load_from_path(&dir.path().join("notify.toml")).unwrap();
        assert_eq!(config, NotifyConfig::default());
    }
}
