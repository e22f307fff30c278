//! # Notify Core Library (`notify-core`)
//!
//! Infrastructure shared by the Notify crates. It carries no notification logic
//! of its own; `notify-domain` builds on it.
//!
//! - **Error Handling**: [`CoreError`] and the more specific [`ConfigError`] and
//!   [`LoggingError`].
//! - **Configuration**: [`LoggingConfig`] and the TOML based [`ConfigLoader`].
//! - **Logging**: `tracing` subscriber setup for console and rolling file output.
//!
//! ```rust,ignore
//! use notify_core::config::{ConfigLoader, LoggingConfig};
//! use notify_core::logging::init_logging;
//!
//! let logging: LoggingConfig = ConfigLoader::load_from_path(&ConfigLoader::default_config_path()?)?;
//! init_logging(&logging.validated()?, false)?;
//! tracing::info!("logging ready");
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
