// Rust guideline compliant 2026-10-18

//! The command provider: factories and registration.

use crate::command::{BootingCommand, Command, ConfigurationCommand, InstallStepCommand};
use crate::error::Result;
use crate::id::{CommandId, Dependency};
use crate::registry::CommandRegistry;
use crate::services::{Container, Readiness};
use tracing::debug;

/// Builds the install and configuration commands.
///
/// Readiness is fixed when the provider is created; every configuration
/// command built afterwards sees the same value.
#[derive(Debug, Clone, Copy)]
pub struct ServiceProvider {
    readiness: Readiness,
}

impl ServiceProvider {
    /// Creates a provider with a known readiness.
    pub fn new(readiness: Readiness) -> Self {
        Self { readiness }
    }

    /// Creates a provider, asking the container for readiness once.
    ///
    /// # Errors
    /// Propagates the container's error if the configuration manager is
    /// unavailable.
    pub fn from_container(container: &dyn Container) -> Result<Self> {
        Ok(Self::new(Readiness::detect(container)?))
    }

    /// Readiness captured at construction.
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Resolves an identifier to a constructed command.
    ///
    /// # Arguments
    /// * `identifier` - Command identifier such as `install:setup`
    /// * `container` - Source of the boot service
    ///
    /// # Errors
    /// Returns [`crate::CommandError::UnknownCommand`] for an unknown
    /// identifier. Container errors are returned unchanged.
    pub fn resolve(&self, identifier: &str, container: &dyn Container) -> Result<Box<dyn Command>> {
        let id: CommandId = identifier.parse()?;
        self.build(id, container)
    }

    /// Runs the factory for `id`.
    ///
    /// Only boot-service commands touch the container, and they fetch the
    /// service exactly once.
    ///
    /// # Errors
    /// Returns the container's error when the boot service is unavailable.
    pub fn build(&self, id: CommandId, container: &dyn Container) -> Result<Box<dyn Command>> {
        debug!(command = %id, "Resolving command");
        let command: Box<dyn Command> = match id.dependency() {
            Dependency::Readiness => Box::new(ConfigurationCommand::new(id, self.readiness)),
            Dependency::BootService => Box::new(BootingCommand::new(id, container.boot_service()?)),
            Dependency::Nothing => Box::new(InstallStepCommand::new(id)),
        };
        Ok(command)
    }

    /// Binds every command to `registry` lazily.
    ///
    /// # Returns
    /// The same registry, with one binding per command
    pub fn register_all<R: CommandRegistry>(&self, mut registry: R) -> R {
        for id in CommandId::ALL {
            registry.add_lazy_command(id.identifier(), id, id.description());
        }
        debug!(count = CommandId::ALL.len(), "Registered commands");
        registry
    }
}
