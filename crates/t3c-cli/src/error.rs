// Rust guideline compliant 2026-10-18

//! Error types for configuration and start-up.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration or installing logging.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("Invalid config file: {0}")]
    Parse(String),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
