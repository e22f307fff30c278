//! Error types for the Notify core layer.
//!
//! [`CoreError`] is the umbrella type returned by the public functions of this
//! crate. It wraps the narrower [`ConfigError`] and [`LoggingError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Notify infrastructure.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration could not be located, read, parsed or validated.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// The logging subsystem could not be set up.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or does not match the expected schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsed values were rejected.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// The platform configuration directory could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// The configured level is not a known filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}
