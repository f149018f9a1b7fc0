// Rust guideline compliant 2026-10-18

//! Lazy command bindings.

use crate::command::Command;
use crate::error::{CommandError, Result};
use crate::id::CommandId;
use crate::provider::ServiceProvider;
use crate::services::Container;

/// A host that accepts lazily constructed commands.
pub trait CommandRegistry {
    /// Binds `identifier` to `command` without constructing it.
    fn add_lazy_command(&mut self, identifier: &str, command: CommandId, description: &str);
}

impl<R: CommandRegistry + ?Sized> CommandRegistry for &mut R {
    fn add_lazy_command(&mut self, identifier: &str, command: CommandId, description: &str) {
        (**self).add_lazy_command(identifier, command, description);
    }
}

/// A single lazy binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyCommand {
    pub identifier: String,
    pub command: CommandId,
    pub description: String,
}

/// In-memory registry keyed by identifier.
///
/// Rebinding an identifier replaces the earlier binding in place, so
/// iteration order is the order identifiers were first seen.
#[derive(Debug, Clone, Default)]
pub struct LazyCommandRegistry {
    entries: Vec<LazyCommand>,
}

impl LazyCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding for `identifier`, if any.
    pub fn get(&self, identifier: &str) -> Option<&LazyCommand> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LazyCommand> {
        self.entries.iter()
    }

    /// Constructs the command bound to `identifier`.
    ///
    /// # Arguments
    /// * `identifier` - Registered identifier
    /// * `provider` - Provider whose factories build the command
    /// * `container` - Services handed to the factory
    ///
    /// # Errors
    /// Returns [`CommandError::UnknownCommand`] if nothing is bound, or the
    /// factory's error.
    pub fn instantiate(
        &self,
        identifier: &str,
        provider: &ServiceProvider,
        container: &dyn Container,
    ) -> Result<Box<dyn Command>> {
        let entry = self
            .get(identifier)
            .ok_or_else(|| CommandError::UnknownCommand(identifier.to_string()))?;
        provider.build(entry.command, container)
    }
}

impl CommandRegistry for LazyCommandRegistry {
    fn add_lazy_command(&mut self, identifier: &str, command: CommandId, description: &str) {
        let binding = LazyCommand {
            identifier: identifier.to_string(),
            command,
            description: description.to_string(),
        };
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.identifier == identifier)
        {
            Some(existing) => *existing = binding,
            None => self.entries.push(binding),
        }
    }
}

impl<'a> IntoIterator for &'a LazyCommandRegistry {
    type Item = &'a LazyCommand;
    type IntoIter = std::slice::Iter<'a, LazyCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
