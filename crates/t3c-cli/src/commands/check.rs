// Rust guideline compliant 2026-10-18

//! Implementation of the `t3c check` command.
//!
//! Reports whether the installation has its essential configuration.

use super::write_json;
use anyhow::Result;
use serde_json::json;
use t3c_commands::{FileConfigurationManager, Readiness};
use t3c_console::{args, ConsoleOutput};
use termcolor::WriteColor;

/// Prints readiness and the configuration files it depends on.
///
/// # Arguments
///
/// * `console` - Output facade
/// * `manager` - Configuration files of the installation
/// * `readiness` - Readiness computed at start-up
/// * `json` - Emit JSON instead of text
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute<W: WriteColor>(
    console: &mut ConsoleOutput<W>,
    manager: &FileConfigurationManager,
    readiness: Readiness,
    json: bool,
) -> Result<()> {
    let files: Vec<(String, bool)> = manager
        .required_paths()
        .into_iter()
        .map(|path| {
            let exists = path.is_file();
            (path.display().to_string(), exists)
        })
        .collect();

    if json {
        let files: Vec<_> = files
            .iter()
            .map(|(path, exists)| json!({ "path": path, "exists": exists }))
            .collect();
        return write_json(
            console,
            &json!({
                "project_root": manager.project_root().display().to_string(),
                "ready": readiness.is_ready(),
                "files": files,
            }),
        );
    }

    let style = if readiness.is_ready() { "success" } else { "warning" };
    console.write_line(
        "Project root: %s",
        &args![manager.project_root().display().to_string()],
    )?;
    console.write_line(
        &format!("Installation: <{style}>%s</{style}>"),
        &args![readiness.to_string()],
    )?;
    for (path, exists) in files {
        let mark = if exists { "<success>found</success>" } else { "<error>missing</error>" };
        console.write_line(&format!("  [{mark}] %s"), &args![path])?;
    }
    Ok(())
}
