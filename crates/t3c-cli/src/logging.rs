// Rust guideline compliant 2026-10-18

//! Tracing subscriber set-up for the binary.

use crate::config::Config;
use crate::error::{ConfigError, Result};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or as JSON lines to `config.log_file` when set.
///
/// # Returns
///
/// The appender guard when logging to a file; keep it alive until exit so
/// buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log level is unknown or the log file cannot be
/// opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.log_level)?;

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name, ignoring case.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for an unknown name.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ConfigError::Invalid(format!("unknown log level {}", other))),
    }
}
