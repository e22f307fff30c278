//! Default configuration values, referenced from `#[serde(default = ...)]`.

use std::path::PathBuf;

/// File name looked up inside the application configuration directory.
pub const CONFIG_FILE_NAME: &str = "notify.toml";

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}
