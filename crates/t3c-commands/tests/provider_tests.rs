// Rust guideline compliant 2026-10-18

//! Integration tests for command registration and resolution.

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use t3c_commands::{
    BootService, CommandError, CommandId, CommandRegistry, ConfigurationManager, Container,
    FileConfigurationManager, LazyCommandRegistry, Readiness, Result, ServiceProvider,
    StaticContainer,
};
use tempfile::TempDir;

#[derive(Debug)]
struct FixedConfiguration(bool);

impl ConfigurationManager for FixedConfiguration {
    fn essential_configuration_exists(&self) -> bool {
        self.0
    }
}

#[derive(Debug)]
struct NullBoot;

impl BootService for NullBoot {
    fn boot(&self) -> Result<()> {
        Ok(())
    }
}

/// Container that counts every service lookup.
#[derive(Default)]
struct CountingContainer {
    ready: bool,
    fail_boot: bool,
    boot_calls: Cell<usize>,
    configuration_calls: Cell<usize>,
}

impl CountingContainer {
    fn total_calls(&self) -> usize {
        self.boot_calls.get() + self.configuration_calls.get()
    }
}

impl Container for CountingContainer {
    fn boot_service(&self) -> Result<Arc<dyn BootService>> {
        self.boot_calls.set(self.boot_calls.get() + 1);
        if self.fail_boot {
            return Err(CommandError::Container("boot service not registered".to_string()));
        }
        Ok(Arc::new(NullBoot))
    }

    fn configuration_manager(&self) -> Result<Arc<dyn ConfigurationManager>> {
        self.configuration_calls
            .set(self.configuration_calls.get() + 1);
        Ok(Arc::new(FixedConfiguration(self.ready)))
    }
}

/// Registry that records calls verbatim, duplicates included.
#[derive(Default)]
struct RecordingRegistry {
    calls: Vec<(String, CommandId, String)>,
}

impl CommandRegistry for RecordingRegistry {
    fn add_lazy_command(&mut self, identifier: &str, command: CommandId, description: &str) {
        self.calls
            .push((identifier.to_string(), command, description.to_string()));
    }
}

#[test]
fn test_register_all_binds_each_command_once() {
    let provider = ServiceProvider::new(Readiness::Ready);
    let registry = provider.register_all(RecordingRegistry::default());

    assert_eq!(registry.calls.len(), 15);
    let identifiers: HashSet<&str> = registry.calls.iter().map(|c| c.0.as_str()).collect();
    assert_eq!(identifiers.len(), 15);

    for (identifier, id, description) in &registry.calls {
        assert_eq!(identifier, id.identifier());
        assert_eq!(description, id.description());
    }

    let find = |identifier: &str| {
        registry
            .calls
            .iter()
            .find(|c| c.0 == identifier)
            .map(|c| c.2.clone())
            .unwrap()
    };
    assert_eq!(find("install:lock"), "Lock Install Tool");
    assert_eq!(
        find("database:updateschema"),
        "Update database schema (TYPO3 Database Compare)"
    );
    assert_eq!(find("install:extensionsetupifpossible"), "Fix folder structure");
}

#[test]
fn test_register_all_into_borrowed_registry() {
    let provider = ServiceProvider::new(Readiness::NotReady);
    let mut registry = LazyCommandRegistry::new();
    provider.register_all(&mut registry);
    provider.register_all(&mut registry);

    assert_eq!(registry.len(), 15);
    let order: Vec<CommandId> = registry.iter().map(|entry| entry.command).collect();
    assert_eq!(order, CommandId::ALL.to_vec());
}

#[test]
fn test_resolve_plain_command_touches_no_service() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::new(Readiness::Ready);

    let command = provider.resolve("install:databaseconnect", &container).unwrap();
    assert_eq!(command.id(), CommandId::InstallDatabaseConnect);
    assert_eq!(command.name(), "install:databaseconnect");
    assert_eq!(container.total_calls(), 0);
}

#[test]
fn test_resolve_booting_command_fetches_boot_service_once() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::new(Readiness::Ready);

    let command = provider.resolve("database:updateschema", &container).unwrap();
    assert_eq!(command.id(), CommandId::DatabaseUpdateSchema);
    assert_eq!(container.boot_calls.get(), 1);
    assert_eq!(container.configuration_calls.get(), 0);
}

#[test]
fn test_readiness_is_detected_once() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::from_container(&container).unwrap();
    assert_eq!(container.configuration_calls.get(), 1);

    for identifier in ["configuration:set", "configuration:remove", "configuration:showlocal"] {
        let command = provider.resolve(identifier, &container).unwrap();
        assert!(!command.is_enabled());
    }
    assert_eq!(container.configuration_calls.get(), 1);
    assert_eq!(container.boot_calls.get(), 0);
}

#[test]
fn test_configuration_commands_enabled_when_ready() {
    let container = CountingContainer {
        ready: true,
        ..CountingContainer::default()
    };
    let provider = ServiceProvider::from_container(&container).unwrap();
    let command = provider.resolve("configuration:showlocal", &container).unwrap();
    assert!(command.is_enabled());
    assert_eq!(command.description(), "Show local configuration value");
}

#[test]
fn test_resolve_unknown_identifier() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::new(Readiness::Ready);
    let err = provider.resolve("install:nothing", &container).unwrap_err();
    assert_eq!(err, CommandError::UnknownCommand("install:nothing".to_string()));
    assert_eq!(err.to_string(), "Command \"install:nothing\" is not defined.");
    assert_eq!(container.total_calls(), 0);
}

#[test]
fn test_container_errors_propagate_unchanged() {
    let container = CountingContainer {
        fail_boot: true,
        ..CountingContainer::default()
    };
    let provider = ServiceProvider::new(Readiness::Ready);
    let err = provider.resolve("install:databasedata", &container).unwrap_err();
    assert_eq!(
        err,
        CommandError::Container("boot service not registered".to_string())
    );
}

#[test]
fn test_instantiate_from_registry() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::new(Readiness::Ready);
    let registry = provider.register_all(LazyCommandRegistry::new());

    let command = registry
        .instantiate("install:defaultconfiguration", &provider, &container)
        .unwrap();
    assert_eq!(command.id(), CommandId::InstallDefaultConfiguration);
    assert_eq!(container.boot_calls.get(), 1);

    assert!(matches!(
        registry.instantiate("cache:flush", &provider, &container),
        Err(CommandError::UnknownCommand(_))
    ));
}

#[test]
fn test_every_command_resolves() {
    let container = CountingContainer::default();
    let provider = ServiceProvider::new(Readiness::Ready);
    for id in CommandId::ALL {
        let command = provider.resolve(id.identifier(), &container).unwrap();
        assert_eq!(command.id(), id);
        assert_eq!(command.description(), id.description());
    }
    assert_eq!(container.boot_calls.get(), 3);
}

#[test]
fn test_static_container_with_files_on_disk() {
    let dir = TempDir::new().unwrap();
    let manager = FileConfigurationManager::new(dir.path(), "config/system/settings.php", None);
    let container = StaticContainer::for_project(manager.clone());
    assert_eq!(
        ServiceProvider::from_container(&container).unwrap().readiness(),
        Readiness::NotReady
    );

    fs::create_dir_all(dir.path().join("config/system")).unwrap();
    fs::write(manager.settings_path(), "<?php\nreturn [];\n").unwrap();
    let provider = ServiceProvider::from_container(&container).unwrap();
    assert_eq!(provider.readiness(), Readiness::Ready);

    let command = provider.resolve("install:databasedata", &container).unwrap();
    assert!(command.is_enabled());
}

proptest! {
    /// The registry holds one binding per distinct identifier, in
    /// first-seen order, carrying the last description given.
    #[test]
    fn prop_registry_dedupes(indices in prop::collection::vec((0usize..15, "[a-z]{1,8}"), 0..40)) {
        let mut registry = LazyCommandRegistry::new();
        let mut first_seen: Vec<CommandId> = Vec::new();
        for (index, description) in &indices {
            let id = CommandId::ALL[*index];
            if !first_seen.contains(&id) {
                first_seen.push(id);
            }
            registry.add_lazy_command(id.identifier(), id, description);
        }

        let order: Vec<CommandId> = registry.iter().map(|entry| entry.command).collect();
        prop_assert_eq!(order, first_seen);

        for entry in &registry {
            let last = indices
                .iter()
                .rev()
                .find(|(index, _)| CommandId::ALL[*index] == entry.command)
                .map(|(_, description)| description.as_str());
            prop_assert_eq!(Some(entry.description.as_str()), last);
        }
    }
}
