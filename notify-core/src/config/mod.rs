//! Configuration management for Notify.
//!
//! - [`types`]: the [`LoggingConfig`] schema.
//! - [`defaults`]: serde default functions used by the schema.
//! - [`loader`]: [`ConfigLoader`], which reads and parses TOML files.
//!
//! Higher layers define their own root configuration structs (for example
//! `notify_domain::NotifyConfig`) and embed [`LoggingConfig`] in them, then
//! read the file through [`ConfigLoader::load_from_path`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::LoggingConfig;
