// Rust guideline compliant 2026-10-18

//! Command implementations for the t3c CLI.

pub mod check;
pub mod list;
pub mod self_test;
pub mod show;

use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use t3c_console::ConsoleOutput;
use termcolor::WriteColor;

/// Writes `value` as pretty JSON, bypassing markup interpretation.
pub(crate) fn write_json<W: WriteColor>(console: &mut ConsoleOutput<W>, value: &Value) -> Result<()> {
    let output = console.output_mut();
    writeln!(output, "{}", serde_json::to_string_pretty(value)?)?;
    output.flush()?;
    Ok(())
}
