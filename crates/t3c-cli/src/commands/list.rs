// Rust guideline compliant 2026-10-18

//! Implementation of the `t3c list` command.
//!
//! Registers every command into a fresh registry and lists the bindings.

use super::write_json;
use anyhow::Result;
use serde_json::json;
use t3c_commands::{LazyCommandRegistry, ServiceProvider};
use t3c_console::ConsoleOutput;
use termcolor::WriteColor;

/// Lists registered commands.
///
/// # Arguments
///
/// * `console` - Output facade
/// * `provider` - Provider whose commands are registered
/// * `json` - Emit JSON instead of a table
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute<W: WriteColor>(
    console: &mut ConsoleOutput<W>,
    provider: &ServiceProvider,
    json: bool,
) -> Result<()> {
    let registry = provider.register_all(LazyCommandRegistry::new());

    if json {
        let commands: Vec<_> = registry
            .iter()
            .map(|entry| {
                json!({
                    "identifier": entry.identifier,
                    "description": entry.description,
                })
            })
            .collect();
        return write_json(
            console,
            &json!({ "commands": commands, "total": registry.len() }),
        );
    }

    let rows: Vec<[&str; 2]> = registry
        .iter()
        .map(|entry| [entry.identifier.as_str(), entry.description.as_str()])
        .collect();
    console.render_table_with_headers(&rows, &["Command", "Description"])?;
    Ok(())
}
