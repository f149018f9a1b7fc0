// Rust guideline compliant 2026-10-18

//! t3c CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::{init_tracing, parse_log_level};
