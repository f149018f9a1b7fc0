// Rust guideline compliant 2026-10-18

//! t3c console library.
//!
//! This crate provides the console facade used by t3c commands:
//! - Styled output with `printf`-style substitution and word wrapping
//! - Table rendering
//! - Progress display
//! - Interactive questions (choices, free text, confirmation, hidden and
//!   validated answers)

pub mod error;
pub mod output;
pub mod progress;
pub mod question;
pub mod sprintf;
pub mod style;
pub mod table;
pub mod terminal;

pub use error::{ConsoleError, FormatError, Result};
pub use output::{ConsoleOutput, OutputMode, SUB_PROCESS_ENV};
pub use progress::{Progress, ProgressTarget};
pub use question::{Attempts, Choices, Input, Prompt, Question, QuestionHelper, Selection};
pub use sprintf::{sprintf, Arg};
pub use style::StyleFormatter;
pub use table::Table;
pub use terminal::{get_terminal_width, should_use_color, wrap_line, Terminal};
