// Rust guideline compliant 2026-10-18

//! Constructed command objects.

use crate::id::CommandId;
use crate::services::{BootService, Readiness};
use std::fmt;
use std::sync::Arc;

/// A command built by the provider.
pub trait Command: fmt::Debug {
    /// Which command this is.
    fn id(&self) -> CommandId;

    /// Name the command was constructed with.
    fn name(&self) -> &str {
        self.id().identifier()
    }

    /// Summary shown in listings.
    fn description(&self) -> &str {
        self.id().description()
    }

    /// Whether the command can run in the current installation.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Reads or writes local configuration; inert on an unconfigured installation.
#[derive(Debug, Clone)]
pub struct ConfigurationCommand {
    id: CommandId,
    readiness: Readiness,
}

impl ConfigurationCommand {
    pub fn new(id: CommandId, readiness: Readiness) -> Self {
        Self { id, readiness }
    }

    /// Readiness the command was built with.
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }
}

impl Command for ConfigurationCommand {
    fn id(&self) -> CommandId {
        self.id
    }

    fn is_enabled(&self) -> bool {
        self.readiness.is_ready()
    }
}

/// A command that needs the fully booted system.
#[derive(Debug, Clone)]
pub struct BootingCommand {
    id: CommandId,
    boot: Arc<dyn BootService>,
}

impl BootingCommand {
    pub fn new(id: CommandId, boot: Arc<dyn BootService>) -> Self {
        Self { id, boot }
    }

    /// The boot service injected at construction.
    pub fn boot_service(&self) -> &Arc<dyn BootService> {
        &self.boot
    }
}

impl Command for BootingCommand {
    fn id(&self) -> CommandId {
        self.id
    }
}

/// An install step constructed from its name alone.
#[derive(Debug, Clone)]
pub struct InstallStepCommand {
    id: CommandId,
    name: String,
}

impl InstallStepCommand {
    pub fn new(id: CommandId) -> Self {
        Self {
            id,
            name: id.identifier().to_string(),
        }
    }
}

impl Command for InstallStepCommand {
    fn id(&self) -> CommandId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_command_is_inert_when_not_ready() {
        let command = ConfigurationCommand::new(CommandId::ConfigurationSet, Readiness::NotReady);
        assert!(!command.is_enabled());
        assert_eq!(command.name(), "configuration:set");

        let command = ConfigurationCommand::new(CommandId::ConfigurationSet, Readiness::Ready);
        assert!(command.is_enabled());
    }

    #[test]
    fn test_install_step_uses_identifier_as_name() {
        let command = InstallStepCommand::new(CommandId::InstallSetup);
        assert_eq!(command.name(), "install:setup");
        assert_eq!(command.description(), "TYPO3 Setup");
        assert!(command.is_enabled());
    }
}
