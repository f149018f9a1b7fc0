// Rust guideline compliant 2026-10-18

//! Error types for the console facade.

use thiserror::Error;

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors raised while formatting `printf`-style text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The format string references more arguments than were given.
    #[error("Missing argument {position} (only {given} given)")]
    MissingArgument {
        /// 1-based argument position that was requested.
        position: usize,
        /// Number of arguments actually supplied.
        given: usize,
    },

    /// A conversion specifier is not supported.
    #[error("Unknown format specifier \"{0}\"")]
    UnknownConversion(char),

    /// The format string ends in the middle of a specifier.
    #[error("Incomplete format specifier at end of string")]
    Incomplete,

    /// A padding width exceeds the supported maximum.
    #[error("Width must be less than {max}, got {width}")]
    WidthTooLarge {
        /// Requested width.
        width: usize,
        /// Largest accepted width.
        max: usize,
    },
}

/// Errors raised by the console facade.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input was requested but no input stream is available.
    #[error("Cannot initialize input without CLI context.")]
    NoCliContext,

    /// The input stream was closed while a question was waiting for an answer.
    #[error("Aborted.")]
    Aborted,

    /// An answer was rejected and no attempts are left.
    #[error("{0}")]
    InvalidValue(String),

    /// A question was configured with a limit of zero attempts.
    #[error("Maximum number of attempts must be a positive value.")]
    InvalidAttempts,

    /// The response cannot be hidden and no visible fallback is allowed.
    #[error("Unable to hide the response.")]
    HiddenUnsupported,

    /// A progress operation was called before `progress_start`.
    #[error("No progress has been started. Call progress_start() first.")]
    ProgressNotStarted,

    /// Invalid `printf`-style format string or arguments.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
