// Rust guideline compliant 2026-10-18

//! Implementation of the `t3c self-test` command.
//!
//! Drives the console facade end to end: wrapped text, a table and a
//! progress run.

use anyhow::Result;
use t3c_console::{args, ConsoleOutput};
use termcolor::WriteColor;

const SAMPLE_TEXT: &str = "The console wraps long paragraphs to the terminal width, \
keeping whole words together and indenting every line it emits.\n\
Paragraph breaks in the input are kept as they are.";

/// Runs the facade self-test.
///
/// # Arguments
///
/// * `console` - Output facade under test
/// * `steps` - Number of progress steps to run
///
/// # Errors
///
/// Returns an error if any facade operation fails.
pub fn execute<W: WriteColor>(console: &mut ConsoleOutput<W>, steps: u64) -> Result<()> {
    console.write_line("<comment>Wrapped output</comment>", &[])?;
    console.write_wrapped(SAMPLE_TEXT, &[], 2)?;

    console.write_line("<comment>Table output</comment>", &[])?;
    let width = console.maximum_line_length().to_string();
    let mode = if console.is_raw() { "raw" } else { "styled" };
    console.render_table_with_headers(
        &[["maximum line length", width.as_str()], ["output mode", mode]],
        &["Setting", "Value"],
    )?;

    console.write_line("<comment>Progress output</comment>", &[])?;
    console.progress_start(Some(steps));
    for _ in 0..steps {
        console.progress_advance(1)?;
    }
    let position = console.progress_position().unwrap_or_default();
    console.progress_finish()?;

    console.write_line(
        "<success>Completed %d of %d progress steps</success>",
        &args![position, steps],
    )?;
    Ok(())
}
