// Rust guideline compliant 2026-10-18

//! Progress reporting for long-running console operations.

use crate::error::{ConsoleError, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = " {pos}/{len} [{bar:28}] {percent:>3}%";
const SPINNER_TEMPLATE: &str = " {pos} [{spinner}]";

/// Where a progress display is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressTarget {
    /// Standard output (drawn only when it is a terminal).
    #[default]
    Stdout,
    /// Standard error (drawn only when it is a terminal).
    Stderr,
    /// Never drawn; state is still tracked.
    Hidden,
}

impl ProgressTarget {
    fn draw_target(self) -> ProgressDrawTarget {
        match self {
            ProgressTarget::Stdout => ProgressDrawTarget::stdout(),
            ProgressTarget::Stderr => ProgressDrawTarget::stderr(),
            ProgressTarget::Hidden => ProgressDrawTarget::hidden(),
        }
    }
}

/// A restartable progress display.
///
/// Every mutation fails with [`ConsoleError::ProgressNotStarted`] unless a
/// run has been started with [`Progress::start`] and not yet finished.
#[derive(Debug)]
pub struct Progress {
    target: ProgressTarget,
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Creates an idle progress display.
    pub fn new(target: ProgressTarget) -> Self {
        Self { target, bar: None }
    }

    /// Starts a new run, replacing any unfinished one.
    ///
    /// # Arguments
    /// * `max` - Number of steps, or `None` for an indeterminate display
    pub fn start(&mut self, max: Option<u64>) {
        if let Some(previous) = self.bar.take() {
            previous.abandon();
        }

        let bar = match max {
            Some(max) => {
                let bar = ProgressBar::with_draw_target(Some(max), self.target.draw_target());
                bar.set_style(
                    ProgressStyle::with_template(BAR_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("=>-"),
                );
                bar
            }
            None => {
                let bar = ProgressBar::with_draw_target(None, self.target.draw_target());
                bar.set_style(
                    ProgressStyle::with_template(SPINNER_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                bar
            }
        };

        self.bar = Some(bar);
    }

    /// Advances the current run by `step`.
    ///
    /// # Errors
    /// Returns an error if no run is active.
    pub fn advance(&mut self, step: u64) -> Result<()> {
        let bar = self.active()?;
        bar.inc(step);
        Ok(())
    }

    /// Sets the absolute position of the current run.
    ///
    /// # Errors
    /// Returns an error if no run is active.
    pub fn set(&mut self, current: u64) -> Result<()> {
        let bar = self.active()?;
        bar.set_position(current);
        Ok(())
    }

    /// Completes the current run and leaves the final state on screen.
    ///
    /// # Errors
    /// Returns an error if no run is active.
    pub fn finish(&mut self) -> Result<()> {
        let bar = self.bar.take().ok_or(ConsoleError::ProgressNotStarted)?;
        if let Some(len) = bar.length() {
            bar.set_position(len);
        }
        bar.finish();
        Ok(())
    }

    /// Position of the active run.
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Maximum of the active run; `None` when idle or indeterminate.
    pub fn length(&self) -> Option<u64> {
        self.bar.as_ref().and_then(ProgressBar::length)
    }

    /// Returns whether a run is active.
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    fn active(&self) -> Result<&ProgressBar> {
        self.bar.as_ref().ok_or(ConsoleError::ProgressNotStarted)
    }
}
