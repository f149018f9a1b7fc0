// Rust guideline compliant 2026-10-18

//! Implementation of the `t3c show` command.

use super::write_json;
use anyhow::Result;
use serde_json::json;
use t3c_commands::{Container, Dependency, ServiceProvider};
use t3c_console::{args, ConsoleOutput};
use termcolor::WriteColor;

/// Resolves one command and describes it.
///
/// # Arguments
///
/// * `console` - Output facade
/// * `provider` - Provider that builds the command
/// * `container` - Services handed to the factory
/// * `identifier` - Command identifier
/// * `json` - Emit JSON instead of text
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is unknown
/// - The container cannot supply the boot service
/// - The output cannot be written
pub fn execute<W: WriteColor>(
    console: &mut ConsoleOutput<W>,
    provider: &ServiceProvider,
    container: &dyn Container,
    identifier: &str,
    json: bool,
) -> Result<()> {
    let command = provider.resolve(identifier, container)?;
    let state = if command.is_enabled() { "active" } else { "inert" };
    let requires = match command.id().dependency() {
        Dependency::Readiness => "configuration",
        Dependency::BootService => "boot",
        Dependency::Nothing => "nothing",
    };

    if json {
        return write_json(
            console,
            &json!({
                "identifier": command.name(),
                "description": command.description(),
                "state": state,
                "requires": requires,
            }),
        );
    }

    console.write_line("<info>%s</info>", &args![command.name()])?;
    console.write_line("  Description: %s", &args![command.description()])?;
    console.write_line("  State:       %s", &args![state])?;
    console.write_line("  Requires:    %s", &args![requires])?;
    Ok(())
}
