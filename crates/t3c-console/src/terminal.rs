// Rust guideline compliant 2026-10-18

//! Terminal utilities for the console facade.
//!
//! This module provides color support detection, terminal width detection
//! and word wrapping.

use std::env;

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Determines if colored output should be used on stdout.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Returns whether stdin is attached to an interactive terminal.
pub fn stdin_is_terminal() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Gets the terminal width in columns.
///
/// The `COLUMNS` environment variable wins over the size reported by the
/// operating system.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    if let Some(columns) = env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|columns| *columns > 0)
    {
        return columns;
    }

    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Terminal dimensions used for wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminal {
    fixed_width: Option<usize>,
}

impl Terminal {
    /// A terminal whose width is queried on every call.
    pub fn detect() -> Self {
        Self { fixed_width: None }
    }

    /// A terminal with a fixed width, independent of the environment.
    pub fn fixed(width: usize) -> Self {
        Self {
            fixed_width: Some(width),
        }
    }

    /// Returns the width in columns.
    pub fn width(&self) -> usize {
        self.fixed_width.unwrap_or_else(get_terminal_width)
    }
}

/// Wraps one line of text to at most `width` characters per line.
///
/// Lines break at spaces; the space at a break point is consumed. Words
/// longer than `width` are cut. A `width` of zero is treated as one.
///
/// # Arguments
/// * `line` - The text to wrap, without newlines
/// * `width` - Maximum number of characters per produced line
///
/// # Returns
/// The wrapped lines, never empty
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for (idx, word) in line.split(' ').enumerate() {
        let word_len = word.chars().count();

        if idx > 0 {
            if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        // Place the word on a fresh line, cutting it if it does not fit.
        let mut rest: Vec<char> = word.chars().collect();
        while rest.len() > width {
            let tail = rest.split_off(width);
            lines.push(rest.into_iter().collect());
            rest = tail;
        }
        current_len = rest.len();
        current = rest.into_iter().collect();
    }

    lines.push(current);
    lines
}
