// Rust guideline compliant 2026-10-18

//! The console facade.
//!
//! [`ConsoleOutput`] bundles everything a command needs to talk to the
//! user: formatted output with word wrapping, tables, a progress display and
//! interactive questions. The question helper, progress display and table
//! renderer are created on first use.

use crate::error::{ConsoleError, Result};
use crate::progress::{Progress, ProgressTarget};
use crate::question::{Attempts, Choices, Input, Prompt, PromptOutput, Question, QuestionHelper, Selection};
use crate::sprintf::{sprintf, Arg};
use crate::style::StyleFormatter;
use crate::table::Table;
use crate::terminal::{should_use_color, wrap_line, Terminal};
use std::borrow::Cow;
use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::debug;

/// Environment variable that marks this process as a sub-process whose
/// output is consumed by a parent process.
pub const SUB_PROCESS_ENV: &str = "TYPO3_CONSOLE_SUB_PROCESS";

/// How text reaches the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style tags are interpreted.
    #[default]
    Styled,
    /// Text is written byte for byte; style tags stay in the output so the
    /// parent process can interpret them.
    Raw,
}

impl OutputMode {
    /// Detects the mode from [`SUB_PROCESS_ENV`].
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SUB_PROCESS_ENV).ok().as_deref())
    }

    /// Maps a sub-process marker value to a mode.
    ///
    /// Unset, empty and `"0"` select [`OutputMode::Styled`]; any other value
    /// selects [`OutputMode::Raw`].
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() && value != "0" => OutputMode::Raw,
            _ => OutputMode::Styled,
        }
    }
}

enum InputSource {
    /// Open stdin on first use.
    Lazy,
    /// No input is available.
    Detached,
    Ready(Input),
}

/// Renders markup to the facade's stream for the question helper.
struct MarkupWriter<'a, W: WriteColor> {
    output: &'a mut W,
    formatter: &'a StyleFormatter,
    mode: OutputMode,
}

impl<W: WriteColor> MarkupWriter<'_, W> {
    fn emit(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Raw => self.output.write_all(text.as_bytes())?,
            OutputMode::Styled => self.formatter.write_styled(&mut *self.output, text)?,
        }
        self.output.flush()
    }
}

impl<W: WriteColor> PromptOutput for MarkupWriter<'_, W> {
    fn write_markup(&mut self, text: &str) -> io::Result<()> {
        self.emit(text)
    }
}

/// Console input/output facade.
pub struct ConsoleOutput<W: WriteColor = StandardStream> {
    output: W,
    formatter: StyleFormatter,
    mode: OutputMode,
    terminal: Terminal,
    input: InputSource,
    progress_target: ProgressTarget,
    question_helper: Option<QuestionHelper>,
    progress: Option<Progress>,
    table: Option<Table>,
}

impl ConsoleOutput<StandardStream> {
    /// Creates a facade on stdout that reads answers from stdin.
    ///
    /// The output mode is taken from [`SUB_PROCESS_ENV`].
    pub fn new() -> Self {
        let choice = if should_use_color() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut console = Self::with_output(StandardStream::stdout(choice));
        console.input = InputSource::Lazy;
        console.progress_target = ProgressTarget::Stdout;
        console
    }
}

impl Default for ConsoleOutput<StandardStream> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WriteColor> ConsoleOutput<W> {
    /// Creates a facade writing to `output` without any input.
    ///
    /// Questions fail with [`ConsoleError::NoCliContext`] until an input is
    /// attached with [`ConsoleOutput::with_input`]. The progress display is
    /// hidden.
    pub fn with_output(output: W) -> Self {
        Self {
            output,
            formatter: StyleFormatter::new(),
            mode: OutputMode::from_env(),
            terminal: Terminal::detect(),
            input: InputSource::Detached,
            progress_target: ProgressTarget::Hidden,
            question_helper: None,
            progress: None,
            table: None,
        }
    }

    /// Attaches the input that answers questions.
    pub fn with_input(mut self, input: Input) -> Self {
        self.input = InputSource::Ready(input);
        self
    }

    /// Overrides the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the terminal used for wrapping.
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminal = terminal;
        self
    }

    /// Overrides where the progress display is drawn.
    pub fn with_progress_target(mut self, target: ProgressTarget) -> Self {
        self.progress_target = target;
        self
    }

    /// Returns the underlying stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Returns the underlying stream mutably.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the facade and returns the underlying stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns whether output is written raw (sub-process mode).
    pub fn is_raw(&self) -> bool {
        self.mode == OutputMode::Raw
    }

    /// Returns the desired maximum line length for console output.
    pub fn maximum_line_length(&self) -> usize {
        self.terminal.width().saturating_sub(2)
    }

    /// Outputs `text`, substituting `args` `printf`-style when non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the substitution fails or the stream cannot be
    /// written.
    pub fn write(&mut self, text: &str, args: &[Arg]) -> Result<()> {
        let text = substitute(text, args)?;
        self.markup_writer().emit(&text)?;
        Ok(())
    }

    /// Outputs `text` followed by a line break.
    ///
    /// # Errors
    ///
    /// See [`ConsoleOutput::write`].
    pub fn write_line(&mut self, text: &str, args: &[Arg]) -> Result<()> {
        let text = substitute(text, args)?;
        let mut line = text.into_owned();
        line.push('\n');
        self.markup_writer().emit(&line)?;
        Ok(())
    }

    /// Outputs `text` wrapped to the maximum line length.
    ///
    /// Each existing line is wrapped separately and every produced line is
    /// indented by `indent` spaces; the indentation counts against the
    /// line length.
    ///
    /// # Errors
    ///
    /// See [`ConsoleOutput::write`].
    pub fn write_wrapped(&mut self, text: &str, args: &[Arg], indent: usize) -> Result<()> {
        let text = substitute(text, args)?;
        let width = self.maximum_line_length().saturating_sub(indent);
        let padding = " ".repeat(indent);

        for segment in text.split('\n') {
            for line in wrap_line(segment, width) {
                self.write_line(&format!("{}{}", padding, line), &[])?;
            }
        }
        Ok(())
    }

    /// Renders `rows` as a table without a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be written.
    pub fn render_table<R, S>(&mut self, rows: &[R]) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.render(None, rows)
    }

    /// Renders `rows` as a table below `headers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be written.
    pub fn render_table_with_headers<R, S, H>(&mut self, rows: &[R], headers: &[H]) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
        H: AsRef<str>,
    {
        let headers = headers.iter().map(|cell| self.cell(cell.as_ref())).collect();
        self.render(Some(headers), rows)
    }

    fn render<R, S>(&mut self, headers: Option<Vec<String>>, rows: &[R]) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|cell| self.cell(cell.as_ref())).collect())
            .collect();

        let table = self.table.get_or_insert_with(|| {
            debug!("Initializing table renderer");
            Table::new()
        });
        let rendered = table.set_headers(headers).set_rows(rows).render();

        if !rendered.is_empty() {
            self.output.write_all(rendered.as_bytes())?;
            self.output.write_all(b"\n")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Cell text handed to the table. Markup becomes ANSI sequences on a
    /// color stream, which the table measures by visible width, and is
    /// stripped elsewhere. Raw output keeps it verbatim.
    fn cell(&self, text: &str) -> String {
        match self.mode {
            OutputMode::Raw => text.to_string(),
            OutputMode::Styled if self.output.supports_color() => self.formatter.to_ansi(text),
            OutputMode::Styled => self.formatter.strip(text),
        }
    }

    /// Asks the user to pick one or more of `choices`.
    ///
    /// Answers may name a key or a label; with `multi_select` several
    /// answers are separated by commas. Keyed choices yield keys, listed
    /// choices yield labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidValue`] once `attempts` invalid answers
    /// were given, or an input error.
    pub fn select(
        &mut self,
        prompt: impl Into<Prompt>,
        choices: &Choices,
        default: Option<&str>,
        multi_select: bool,
        attempts: Attempts,
    ) -> Result<Selection> {
        let question = Question::new(prompt)
            .with_default(default)
            .with_attempts(attempts)
            .with_choices(choices.clone());
        self.ask_question(&question, |answer| choices.select(answer, multi_select))
    }

    /// Asks a free-text question.
    ///
    /// # Returns
    /// The answer, the default when the answer is empty, or an empty string
    ///
    /// # Errors
    ///
    /// Returns an input error.
    pub fn ask(
        &mut self,
        prompt: impl Into<Prompt>,
        default: Option<&str>,
        autocomplete: Option<&[&str]>,
    ) -> Result<String> {
        let question = Question::new(prompt)
            .with_default(default)
            .with_autocomplete(autocomplete);
        self.ask_question(&question, |answer| Ok(answer.unwrap_or_default().to_string()))
    }

    /// Asks a yes/no question until it is answered with nothing, yes or no.
    ///
    /// # Errors
    ///
    /// Returns an input error.
    pub fn confirm(&mut self, prompt: impl Into<Prompt>, default: bool) -> Result<bool> {
        let question = Question::new(prompt);
        self.ask_question(&question, |answer| match answer {
            None => Ok(default),
            Some(answer) => parse_confirmation(answer),
        })
    }

    /// Asks a question whose answer is not echoed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::HiddenUnsupported`] when the answer cannot
    /// be hidden and `fallback_to_visible` is false, or an input error.
    pub fn ask_hidden(&mut self, prompt: impl Into<Prompt>, fallback_to_visible: bool) -> Result<String> {
        let question = Question::new(prompt).hidden(fallback_to_visible);
        self.ask_question(&question, |answer| Ok(answer.unwrap_or_default().to_string()))
    }

    /// Asks until `validator` accepts the answer.
    ///
    /// The validator receives the answer (or the default, or `""`) and
    /// returns the normalized value or a rejection message.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidValue`] with the last rejection
    /// message once `attempts` answers were rejected, or an input error.
    pub fn ask_validated<T, F>(
        &mut self,
        prompt: impl Into<Prompt>,
        mut validator: F,
        attempts: Attempts,
        default: Option<&str>,
        autocomplete: Option<&[&str]>,
    ) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        let question = Question::new(prompt)
            .with_default(default)
            .with_attempts(attempts)
            .with_autocomplete(autocomplete);
        self.ask_question(&question, |answer| validator(answer.unwrap_or_default()))
    }

    /// Asks a hidden question until `validator` accepts the answer.
    ///
    /// # Errors
    ///
    /// See [`ConsoleOutput::ask_hidden`] and [`ConsoleOutput::ask_validated`].
    pub fn ask_hidden_validated<T, F>(
        &mut self,
        prompt: impl Into<Prompt>,
        mut validator: F,
        attempts: Attempts,
        fallback_to_visible: bool,
    ) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        let question = Question::new(prompt)
            .hidden(fallback_to_visible)
            .with_attempts(attempts);
        self.ask_question(&question, |answer| validator(answer.unwrap_or_default()))
    }

    /// Starts the progress display; `None` renders an indeterminate one.
    pub fn progress_start(&mut self, max: Option<u64>) {
        let target = self.progress_target;
        self.progress
            .get_or_insert_with(|| {
                debug!(?target, "Initializing progress display");
                Progress::new(target)
            })
            .start(max);
    }

    /// Advances the progress display by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ProgressNotStarted`] without an active run.
    pub fn progress_advance(&mut self, step: u64) -> Result<()> {
        self.active_progress()?.advance(step)
    }

    /// Sets the current progress.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ProgressNotStarted`] without an active run.
    pub fn progress_set(&mut self, current: u64) -> Result<()> {
        self.active_progress()?.set(current)
    }

    /// Finishes the progress display.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ProgressNotStarted`] without an active run.
    pub fn progress_finish(&mut self) -> Result<()> {
        self.active_progress()?.finish()
    }

    /// Position of the active progress run.
    pub fn progress_position(&self) -> Option<u64> {
        self.progress.as_ref().and_then(Progress::position)
    }

    fn active_progress(&mut self) -> Result<&mut Progress> {
        self.progress.as_mut().ok_or(ConsoleError::ProgressNotStarted)
    }

    fn markup_writer(&mut self) -> MarkupWriter<'_, W> {
        MarkupWriter {
            output: &mut self.output,
            formatter: &self.formatter,
            mode: self.mode,
        }
    }

    fn ask_question<T, F>(&mut self, question: &Question, normalize: F) -> Result<T>
    where
        F: FnMut(Option<&str>) -> std::result::Result<T, String>,
    {
        if matches!(self.input, InputSource::Lazy) {
            if std::env::args_os().next().is_none() {
                return Err(ConsoleError::NoCliContext);
            }
            debug!("Opening stdin for questions");
            self.input = InputSource::Ready(Input::stdin());
        }
        let input = match &mut self.input {
            InputSource::Ready(input) => input,
            _ => return Err(ConsoleError::NoCliContext),
        };

        let helper = self.question_helper.get_or_insert_with(|| {
            debug!("Initializing question helper");
            QuestionHelper::new()
        });
        let mut writer = MarkupWriter {
            output: &mut self.output,
            formatter: &self.formatter,
            mode: self.mode,
        };
        helper.ask(input, &mut writer, question, normalize)
    }
}

fn substitute<'a>(text: &'a str, args: &[Arg]) -> Result<Cow<'a, str>> {
    if args.is_empty() {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(sprintf(text, args)?))
}

fn parse_confirmation(answer: &str) -> std::result::Result<bool, String> {
    match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        _ => Err("Please answer yes or no.".to_string()),
    }
}
