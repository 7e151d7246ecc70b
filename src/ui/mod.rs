//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - Confirm prompts, spinners, and the visual theme
//!
//! # Example
//!
//! ```
//! use greenroom::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Environment Check");
//! ui.success("All checks passed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use prompts::confirm_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GreenroomTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question and get the answer.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Start a spinner with indentation.
    fn start_spinner_indented(&mut self, message: &str, indent: usize) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the check banner with the probe count.
    fn show_check_header(&mut self, probe_count: usize);

    /// Show a conduct notice (summary line plus dim detail).
    fn show_notice(&mut self, summary: &str, detail: &str);

    /// Show the boxed warnings panel.
    fn show_warning_panel(&mut self, headline: &str, lead: &str, entries: &[String]);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Finish as passed.
    fn finish_success(&mut self, msg: &str);

    /// Finish as degraded.
    fn finish_warning(&mut self, msg: &str);

    /// Finish as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A yes/no question to put to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt, used for environment overrides
    /// (`GREENROOM_PROMPT_<KEY>`) in non-interactive mode.
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the user just presses enter.
    pub default_yes: bool,
}

impl Prompt {
    /// Create a confirm prompt that defaults to yes.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default_yes: true,
        }
    }

    /// Flip the default answer to no.
    pub fn default_no(mut self) -> Self {
        self.default_yes = false;
        self
    }
}
