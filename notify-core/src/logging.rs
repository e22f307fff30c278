//! Logging setup built on `tracing`.
//!
//! Library code only emits events through the `tracing` macros. Binaries and
//! tests pick a subscriber through one of the two functions here.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the non-blocking file writer alive so buffered lines get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Meant for tests and early start-up. Calling it when a subscriber is already
/// installed does nothing.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn level_filter(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LoggingError::FilterError(format!("Invalid log level in config: {}", other))),
    }
}

fn file_layer(log_path: &Path, json: bool) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    let file_name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::InitializationFailure(format!("Log path {:?} has no file name", log_path)))?;
    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer: BoxedLayer = if json {
        fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).boxed()
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// A stdout layer is always present; a daily-rolling file layer is added when
/// `config.file_path` is set. With `is_reload` a failure to replace an existing
/// subscriber is reported on stderr instead of returned.
///
/// # Errors
///
/// [`CoreError::Logging`] for an unknown level, an unusable log path, or a
/// second initialisation without `is_reload`.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = level_filter(&config.level)?;
    let json = config.format.eq_ignore_ascii_case("json");

    let stdout_layer: BoxedLayer = if json {
        fmt::layer()
            .json()
            .with_writer(io::stdout)
            .with_ansi(false)
            .with_filter(EnvFilter::new(level.to_string()))
            .boxed()
    } else {
        fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(EnvFilter::new(level.to_string()))
            .boxed()
    };

    let mut layers = vec![stdout_layer];
    let mut new_guard = None;
    if let Some(path) = &config.file_path {
        let (layer, guard) = file_layer(path, json)?;
        layers.push(layer.with_filter(EnvFilter::new(level.to_string())).boxed());
        new_guard = Some(guard);
    }

    match Registry::default().with(layers).try_init() {
        Ok(()) => {
            match LOG_WORKER_GUARD.lock() {
                Ok(mut slot) => *slot = new_guard,
                Err(e) => eprintln!("[ERROR] Log worker guard poisoned, file logs may not flush: {}", e),
            }
            Ok(())
        }
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging reload requested but the previous subscriber stays active: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn minimal_logging_can_be_called_twice() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("minimal logging active");
    }

    #[test]
    fn invalid_level_is_rejected_before_install() {
        let config = LoggingConfig { level: "supertrace".to_string(), ..LoggingConfig::default() };
        match init_logging(&config, false) {
            Err(CoreError::Logging(LoggingError::FilterError(msg))) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn file_layer_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/notify.log");

        let (_layer, _guard) = file_layer(&path, false).unwrap();
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn file_layer_json() {
        let dir = TempDir::new().unwrap();
        assert!(file_layer(&dir.path().join("notify.json.log"), true).is_ok());
    }

    #[test]
    fn reload_never_errors() {
        // Whichever test installs the global subscriber first, a reload must succeed.
        let config = LoggingConfig::default();
        assert!(init_logging(&config, true).is_ok());
        assert!(init_logging(&config, true).is_ok());
    }
}
