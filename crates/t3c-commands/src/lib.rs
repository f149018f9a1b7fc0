// Rust guideline compliant 2026-10-18

//! t3c Commands Library
//!
//! Registers the install and configuration commands with a host registry:
//! - Command identifiers and descriptions (`CommandId`)
//! - Factories that inject readiness or the boot service
//! - Typed service container and on-disk configuration checks
//! - An in-memory lazy command registry

pub mod command;
pub mod error;
pub mod id;
pub mod provider;
pub mod registry;
pub mod services;

pub use command::{BootingCommand, Command, ConfigurationCommand, InstallStepCommand};
pub use error::{CommandError, Result};
pub use id::{CommandId, Dependency};
pub use provider::ServiceProvider;
pub use registry::{CommandRegistry, LazyCommand, LazyCommandRegistry};
pub use services::{
    BootService, ConfigurationManager, Container, FileConfigurationManager, ProjectBootService,
    Readiness, StaticContainer,
};
