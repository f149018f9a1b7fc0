// Rust guideline compliant 2026-10-18

//! Identifiers of the install and configuration commands.

use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// What a command's factory needs from its environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// The readiness flag computed when the provider was built.
    Readiness,
    /// The boot service, fetched from the container.
    BootService,
    /// Nothing beyond the command name.
    Nothing,
}

/// One of the commands contributed by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandId {
    ConfigurationRemove,
    ConfigurationSet,
    ConfigurationShowLocal,
    DatabaseUpdateSchema,
    InstallSetup,
    InstallFixFolderStructure,
    InstallExtensionSetupIfPossible,
    InstallEnvironmentAndFolders,
    InstallDatabaseConnect,
    InstallDatabaseData,
    InstallDatabaseSelect,
    InstallDefaultConfiguration,
    InstallActionNeedsExecution,
    InstallLock,
    InstallUnlock,
}

impl CommandId {
    /// Every command, in registration order.
    pub const ALL: [CommandId; 15] = [
        CommandId::ConfigurationRemove,
        CommandId::ConfigurationSet,
        CommandId::ConfigurationShowLocal,
        CommandId::DatabaseUpdateSchema,
        CommandId::InstallSetup,
        CommandId::InstallFixFolderStructure,
        CommandId::InstallExtensionSetupIfPossible,
        CommandId::InstallEnvironmentAndFolders,
        CommandId::InstallDatabaseConnect,
        CommandId::InstallDatabaseData,
        CommandId::InstallDatabaseSelect,
        CommandId::InstallDefaultConfiguration,
        CommandId::InstallActionNeedsExecution,
        CommandId::InstallLock,
        CommandId::InstallUnlock,
    ];

    /// The `group:name` identifier used on the command line.
    pub const fn identifier(self) -> &'static str {
        match self {
            CommandId::ConfigurationRemove => "configuration:remove",
            CommandId::ConfigurationSet => "configuration:set",
            CommandId::ConfigurationShowLocal => "configuration:showlocal",
            CommandId::DatabaseUpdateSchema => "database:updateschema",
            CommandId::InstallSetup => "install:setup",
            CommandId::InstallFixFolderStructure => "install:fixfolderstructure",
            CommandId::InstallExtensionSetupIfPossible => "install:extensionsetupifpossible",
            CommandId::InstallEnvironmentAndFolders => "install:environmentandfolders",
            CommandId::InstallDatabaseConnect => "install:databaseconnect",
            CommandId::InstallDatabaseData => "install:databasedata",
            CommandId::InstallDatabaseSelect => "install:databaseselect",
            CommandId::InstallDefaultConfiguration => "install:defaultconfiguration",
            CommandId::InstallActionNeedsExecution => "install:actionneedsexecution",
            CommandId::InstallLock => "install:lock",
            CommandId::InstallUnlock => "install:unlock",
        }
    }

    /// Human-readable summary shown in command listings.
    pub const fn description(self) -> &'static str {
        match self {
            CommandId::ConfigurationRemove => "Remove configuration value",
            CommandId::ConfigurationSet => "Set configuration value",
            CommandId::ConfigurationShowLocal => "Show local configuration value",
            CommandId::DatabaseUpdateSchema => "Update database schema (TYPO3 Database Compare)",
            CommandId::InstallSetup => "TYPO3 Setup",
            CommandId::InstallFixFolderStructure => "Fix folder structure",
            // Shares its summary with install:fixfolderstructure.
            CommandId::InstallExtensionSetupIfPossible => "Fix folder structure",
            CommandId::InstallEnvironmentAndFolders => "Check environment / create folders",
            CommandId::InstallDatabaseConnect => "Connect to database",
            CommandId::InstallDatabaseData => "Add database data",
            CommandId::InstallDatabaseSelect => "Select database",
            CommandId::InstallDefaultConfiguration => "Write default configuration",
            CommandId::InstallActionNeedsExecution => {
                "Calls needs execution on the given action and returns the result"
            }
            CommandId::InstallLock => "Lock Install Tool",
            CommandId::InstallUnlock => "Unlock Install Tool",
        }
    }

    /// What the factory for this command requires.
    pub const fn dependency(self) -> Dependency {
        match self {
            CommandId::ConfigurationRemove
            | CommandId::ConfigurationSet
            | CommandId::ConfigurationShowLocal => Dependency::Readiness,
            CommandId::DatabaseUpdateSchema
            | CommandId::InstallDatabaseData
            | CommandId::InstallDefaultConfiguration => Dependency::BootService,
            CommandId::InstallSetup
            | CommandId::InstallFixFolderStructure
            | CommandId::InstallExtensionSetupIfPossible
            | CommandId::InstallEnvironmentAndFolders
            | CommandId::InstallDatabaseConnect
            | CommandId::InstallDatabaseSelect
            | CommandId::InstallActionNeedsExecution
            | CommandId::InstallLock
            | CommandId::InstallUnlock => Dependency::Nothing,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for CommandId {
    type Err = CommandError;

    /// Parses an identifier; matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .iter()
            .copied()
            .find(|id| id.identifier() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let identifiers: HashSet<&str> = CommandId::ALL.iter().map(|id| id.identifier()).collect();
        assert_eq!(identifiers.len(), CommandId::ALL.len());
    }

    #[test]
    fn test_parse_roundtrips_identifier() {
        for id in CommandId::ALL {
            assert_eq!(id.identifier().parse::<CommandId>().unwrap(), id);
            assert_eq!(id.to_string(), id.identifier());
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "install:nope".parse::<CommandId>().unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("install:nope".to_string()));
        assert!("Install:Lock".parse::<CommandId>().is_err());
    }

    #[test]
    fn test_dependencies() {
        let booting: Vec<CommandId> = CommandId::ALL
            .into_iter()
            .filter(|id| id.dependency() == Dependency::BootService)
            .collect();
        assert_eq!(
            booting,
            vec![
                CommandId::DatabaseUpdateSchema,
                CommandId::InstallDatabaseData,
                CommandId::InstallDefaultConfiguration
            ]
        );
        assert_eq!(CommandId::ConfigurationSet.dependency(), Dependency::Readiness);
        assert_eq!(CommandId::InstallLock.dependency(), Dependency::Nothing);
    }
}
