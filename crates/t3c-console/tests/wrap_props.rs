// Rust guideline compliant 2026-10-18

//! Property-based tests for word wrapping.

use proptest::prelude::*;
use t3c_console::{wrap_line, ConsoleOutput, OutputMode, Terminal};
use termcolor::Buffer;

/// Generates text made of words separated by single spaces and newlines.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z0-9äöü.,]{1,30}", 1..12).prop_map(|words| words.join(" ")),
        1..5,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    /// No wrapped line is longer than the requested width.
    #[test]
    fn prop_wrap_line_respects_width(line in "[a-z ]{0,120}", width in 1usize..60) {
        for wrapped in wrap_line(&line, width) {
            prop_assert!(wrapped.chars().count() <= width);
        }
    }

    /// Wrapping never drops or reorders non-space characters.
    #[test]
    fn prop_wrap_line_preserves_characters(line in "[a-z ]{0,120}", width in 1usize..60) {
        let original: String = line.chars().filter(|c| *c != ' ').collect();
        let wrapped: String = wrap_line(&line, width)
            .concat()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        prop_assert_eq!(original, wrapped);
    }

    /// The facade keeps every emitted line within width - 2 - indent and
    /// keeps every word that fits on a line intact.
    #[test]
    fn prop_write_wrapped_line_length(text in arb_text(), width in 40usize..120, indent in 0usize..6) {
        let mut console = ConsoleOutput::with_output(Buffer::no_color())
            .with_mode(OutputMode::Styled)
            .with_terminal(Terminal::fixed(width));
        console.write_wrapped(&text, &[], indent).unwrap();
        let output = String::from_utf8(console.into_output().into_inner()).unwrap();

        let padding = " ".repeat(indent);
        for line in output.lines() {
            prop_assert!(line.starts_with(&padding));
            prop_assert!(line.chars().count() - indent <= width - 2 - indent);
        }

        let expected: Vec<&str> = text.split_whitespace().collect();
        let actual: Vec<&str> = output.split_whitespace().collect();
        prop_assert_eq!(expected, actual);
    }
}
