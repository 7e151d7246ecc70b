//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::GreenroomTheme;
use super::SpinnerHandle;

/// A progress spinner for a running probe.
pub struct ProgressSpinner {
    bar: ProgressBar,
    indent: usize,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        Self::with_indent(message, 0)
    }

    /// Create a new spinner with indentation.
    pub fn with_indent(message: &str, indent: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        let prefix = " ".repeat(indent);
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template(&format!("{}{{spinner:.magenta}} {{msg}}", prefix))
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, indent }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        Self { bar, indent: 0 }
    }

    fn finish_with(&mut self, line: String) {
        let prefix = " ".repeat(self.indent);
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(format!("{}{}", prefix, line));
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = GreenroomTheme::new();
        self.finish_with(theme.format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        let theme = GreenroomTheme::new();
        self.finish_with(theme.format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = GreenroomTheme::new();
        self.finish_with(theme.format_error(msg));
    }
}
