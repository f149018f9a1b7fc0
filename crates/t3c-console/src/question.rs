// Rust guideline compliant 2026-10-18

//! Interactive questions.
//!
//! A [`Question`] describes one prompt: its text, default answer, whether
//! the response is hidden and how many attempts the user gets. The
//! [`QuestionHelper`] writes the prompt, reads answers from an [`Input`] and
//! feeds them through a normalizer until one is accepted.

use crate::error::{ConsoleError, Result};
use crate::terminal::stdin_is_terminal;
use console::{Key, Term};
use std::io::{self, BufRead, BufReader};
use tracing::{debug, warn};

/// Destination for prompt text.
///
/// Text may contain style tags; the implementor decides how to render them.
pub trait PromptOutput {
    /// Writes markup text without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream fails.
    fn write_markup(&mut self, text: &str) -> io::Result<()>;
}

/// Source of answers.
pub struct Input {
    reader: Box<dyn BufRead + Send>,
    terminal: bool,
    interactive: bool,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("terminal", &self.terminal)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}

impl Input {
    /// Reads answers from the process stdin.
    pub fn stdin() -> Self {
        Self {
            reader: Box::new(BufReader::new(io::stdin())),
            terminal: stdin_is_terminal(),
            interactive: true,
        }
    }

    /// Reads answers from an arbitrary reader.
    ///
    /// Such input is never treated as a terminal, so hidden questions
    /// fall back to visible reads (or fail).
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(reader),
            terminal: false,
            interactive: true,
        }
    }

    /// Disables interaction: every question resolves to its default.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// Returns whether questions are actually asked.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Returns whether the input is the interactive terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Reads one line without its line terminator. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads one line with echo suppressed.
    fn read_hidden(&mut self) -> Result<Option<String>> {
        let line = Term::stderr().read_secure_line()?;
        Ok(Some(line))
    }

    /// Reads one line key by key from the terminal; Tab completes the
    /// typed text to the first matching candidate.
    fn read_completed(&mut self, candidates: &[String]) -> Result<Option<String>> {
        let term = Term::stdout();
        let mut line = String::new();
        loop {
            match term.read_key()? {
                Key::Enter => {
                    term.write_line("")?;
                    return Ok(Some(line));
                }
                Key::Tab => {
                    if let Some(candidate) = complete(candidates, &line) {
                        term.write_str(&candidate[line.len()..])?;
                        line = candidate.to_string();
                    }
                }
                Key::Backspace => {
                    if line.pop().is_some() {
                        term.clear_chars(1)?;
                    }
                }
                Key::Char(ch) if !ch.is_control() => {
                    line.push(ch);
                    term.write_str(ch.encode_utf8(&mut [0; 4]))?;
                }
                _ => {}
            }
        }
    }
}

/// First candidate that extends `typed`, if any. Matching is
/// case-sensitive and an empty input completes to nothing.
pub(crate) fn complete<'a>(candidates: &'a [String], typed: &str) -> Option<&'a str> {
    if typed.is_empty() {
        return None;
    }
    candidates
        .iter()
        .map(String::as_str)
        .find(|candidate| candidate.len() > typed.len() && candidate.starts_with(typed))
}

/// Text of a question, possibly spanning several lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt(Vec<String>);

impl Prompt {
    /// Returns the prompt lines.
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    fn text(&self) -> String {
        self.0.join("\n")
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Prompt(vec![value.to_string()])
    }
}

impl From<String> for Prompt {
    fn from(value: String) -> Self {
        Prompt(vec![value])
    }
}

impl From<Vec<String>> for Prompt {
    fn from(value: Vec<String>) -> Self {
        Prompt(value)
    }
}

impl From<&[&str]> for Prompt {
    fn from(value: &[&str]) -> Self {
        Prompt(value.iter().map(|line| line.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Prompt {
    fn from(value: [&str; N]) -> Self {
        Prompt(value.iter().map(|line| line.to_string()).collect())
    }
}

/// How many answers a question accepts before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attempts {
    /// Ask until an answer is accepted or the input ends.
    #[default]
    Unlimited,
    /// Give up after this many rejected answers; must be positive.
    Limited(u32),
}

impl Attempts {
    fn validate(&self) -> Result<()> {
        match self {
            Attempts::Limited(0) => Err(ConsoleError::InvalidAttempts),
            _ => Ok(()),
        }
    }

    fn exhausted(&self, rejected: u32) -> bool {
        match self {
            Attempts::Unlimited => false,
            Attempts::Limited(max) => rejected >= *max,
        }
    }
}

impl From<u32> for Attempts {
    fn from(value: u32) -> Self {
        Attempts::Limited(value)
    }
}

impl From<Option<u32>> for Attempts {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Attempts::Unlimited, Attempts::Limited)
    }
}

/// Ordered set of choices for [`crate::ConsoleOutput::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    entries: Vec<(String, String)>,
    keyed: bool,
}

impl Choices {
    /// Choices identified by position; the prompt shows `[0]`, `[1]`, …
    /// and a selection yields the chosen label.
    pub fn from_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: items
                .into_iter()
                .enumerate()
                .map(|(idx, label)| (idx.to_string(), label.into()))
                .collect(),
            keyed: false,
        }
    }

    /// Choices with explicit keys; a selection yields the chosen key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
            keyed: true,
        }
    }

    /// Returns `(key, label)` pairs in display order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Resolves one answer (a label or a key) to the selection value.
    fn resolve(&self, answer: &str) -> std::result::Result<String, String> {
        let by_label: Vec<&(String, String)> =
            self.entries.iter().filter(|(_, label)| label == answer).collect();
        let entry = match by_label.as_slice() {
            [single] => Some(*single),
            [] => self.entries.iter().find(|(key, _)| key == answer),
            _ => return Err("The provided answer is ambiguous. Value should be one of the keys.".to_string()),
        };

        match entry {
            Some((key, _)) if self.keyed => Ok(key.clone()),
            Some((_, label)) => Ok(label.clone()),
            None => Err(format!("Value \"{}\" is invalid", answer)),
        }
    }

    /// Validates a raw answer for a single or multi select.
    pub(crate) fn select(&self, answer: Option<&str>, multi: bool) -> std::result::Result<Selection, String> {
        let answer = answer.unwrap_or_default();
        if !multi {
            return self.resolve(answer).map(Selection::One);
        }

        let parts: Vec<&str> = answer.split(',').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(format!("Value \"{}\" is invalid", answer));
        }
        parts
            .into_iter()
            .map(|part| self.resolve(part))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Selection::Many)
    }
}

/// Result of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Single-select answer.
    One(String),
    /// Multi-select answers, in the order given.
    Many(Vec<String>),
}

impl Selection {
    /// Returns all selected values.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Selection::One(value) => vec![value.as_str()],
            Selection::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Specification of a single question.
#[derive(Debug, Clone, Default)]
pub struct Question {
    prompt: Prompt,
    default: Option<String>,
    hidden: bool,
    hidden_fallback: bool,
    attempts: Attempts,
    autocomplete: Option<Vec<String>>,
    choices: Option<Choices>,
}

impl Question {
    /// Creates a visible question with unlimited attempts.
    pub fn new(prompt: impl Into<Prompt>) -> Self {
        Self {
            prompt: prompt.into(),
            hidden_fallback: true,
            ..Self::default()
        }
    }

    /// Sets the answer used when the user enters nothing.
    pub fn with_default(mut self, default: Option<&str>) -> Self {
        self.default = default.map(str::to_string);
        self
    }

    /// Hides the response; `fallback` allows a visible read when echo
    /// cannot be suppressed.
    pub fn hidden(mut self, fallback: bool) -> Self {
        self.hidden = true;
        self.hidden_fallback = fallback;
        self
    }

    /// Limits the number of attempts.
    pub fn with_attempts(mut self, attempts: Attempts) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets autocomplete candidates (only used on an interactive terminal).
    pub fn with_autocomplete(mut self, values: Option<&[&str]>) -> Self {
        self.autocomplete = values.map(|values| values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Attaches choices that are listed below the prompt.
    pub fn with_choices(mut self, choices: Choices) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// Asks questions and validates answers.
#[derive(Debug, Default)]
pub struct QuestionHelper {
    asked: usize,
}

impl QuestionHelper {
    /// Creates a helper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of prompts written so far.
    pub fn prompts_written(&self) -> usize {
        self.asked
    }

    /// Asks `question` until `normalize` accepts an answer.
    ///
    /// `normalize` receives the trimmed answer, or the default when the
    /// answer is empty (`None` if there is no default). It returns the final
    /// value or a rejection message. Rejections are printed as errors and the
    /// question is asked again until the attempts are used up.
    ///
    /// Non-interactive input skips the prompt and normalizes the default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAttempts` for a zero attempt limit, `InvalidValue`
    /// once the attempts are exhausted, `Aborted`
    /// when the input ends, `HiddenUnsupported` when a hidden answer cannot
    /// be read, and `Io` on stream failures.
    pub fn ask<T, F>(
        &mut self,
        input: &mut Input,
        output: &mut dyn PromptOutput,
        question: &Question,
        mut normalize: F,
    ) -> Result<T>
    where
        F: FnMut(Option<&str>) -> std::result::Result<T, String>,
    {
        question.attempts.validate()?;
        if !input.is_interactive() {
            return normalize(question.default.as_deref()).map_err(ConsoleError::InvalidValue);
        }

        let mut rejected = 0u32;
        loop {
            let answer = self.read_answer(input, output, question)?;
            match normalize(answer.as_deref()) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    rejected += 1;
                    if question.attempts.exhausted(rejected) {
                        return Err(ConsoleError::InvalidValue(message));
                    }
                    output.write_markup(&format!(
                        "<error>{}</error>\n",
                        message.replace('<', "\\<")
                    ))?;
                }
            }
        }
    }

    fn write_prompt(&mut self, output: &mut dyn PromptOutput, question: &Question) -> Result<()> {
        self.asked += 1;
        let text = question.prompt.text();

        match &question.choices {
            Some(choices) => {
                output.write_markup(&format!("{}\n", text))?;
                for (key, label) in choices.entries() {
                    output.write_markup(&format!("  [<comment>{}</comment>] {}\n", key, label))?;
                }
                output.write_markup(" > ")?;
            }
            None => output.write_markup(&text)?,
        }
        Ok(())
    }

    fn read_answer(
        &mut self,
        input: &mut Input,
        output: &mut dyn PromptOutput,
        question: &Question,
    ) -> Result<Option<String>> {
        self.write_prompt(output, question)?;

        let line = if question.hidden {
            if input.is_terminal() {
                let line = input.read_hidden()?;
                output.write_markup("\n")?;
                line
            } else if question.hidden_fallback {
                warn!("Unable to hide the response, falling back to visible input");
                input.read_line()?
            } else {
                return Err(ConsoleError::HiddenUnsupported);
            }
        } else {
            match &question.autocomplete {
                Some(candidates) if input.is_terminal() => input.read_completed(candidates)?,
                Some(_) => {
                    debug!("Autocomplete requires an interactive terminal, ignoring candidates");
                    input.read_line()?
                }
                None => input.read_line()?,
            }
        };

        let line = line.ok_or(ConsoleError::Aborted)?;
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(question.default.clone());
        }
        Ok(Some(answer.to_string()))
    }
}
