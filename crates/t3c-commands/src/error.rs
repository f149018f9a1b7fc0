// Rust guideline compliant 2026-10-18

//! Error types for command registration and resolution.

use thiserror::Error;

/// Result type alias for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Errors raised while resolving commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The identifier does not name a known command.
    #[error("Command \"{0}\" is not defined.")]
    UnknownCommand(String),

    /// A service could not be obtained from the container.
    #[error("Service unavailable: {0}")]
    Container(String),

    /// The boot service failed.
    #[error("Boot failed: {0}")]
    Boot(String),
}
