//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirm answers.
//!
//! # Example
//!
//! ```
//! use greenroom::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_confirm_response("accept", false);
//!
//! // Use ui in code under test...
//! ui.message("Running environment check");
//! let accepted = ui.confirm(&Prompt::new("accept", "I Understand and Accept")).unwrap();
//!
//! assert!(!accepted);
//! assert!(ui.has_message("Running environment check"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured confirm answers.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    notices: Vec<(String, String)>,
    warning_panels: Vec<(String, String, Vec<String>)>,
    check_headers: Vec<usize>,
    spinners: Vec<String>,
    confirm_responses: HashMap<String, bool>,
    confirms_shown: Vec<String>,
    /// Fallback answer for any confirm key not in `confirm_responses`.
    default_confirm_response: Option<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the answer for a confirm key.
    pub fn set_confirm_response(&mut self, key: &str, answer: bool) {
        self.confirm_responses.insert(key.to_string(), answer);
    }

    /// Set a fallback answer for any confirm key not explicitly configured.
    pub fn set_default_confirm_response(&mut self, answer: bool) {
        self.default_confirm_response = Some(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured conduct notices as (summary, detail).
    pub fn notices(&self) -> &[(String, String)] {
        &self.notices
    }

    /// Get all captured warning panels as (headline, lead, entries).
    pub fn warning_panels(&self) -> &[(String, String, Vec<String>)] {
        &self.warning_panels
    }

    /// Get the probe counts from captured check banners.
    pub fn check_headers(&self) -> &[usize] {
        &self.check_headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all confirms that were shown (by key).
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a notice with the given summary was shown.
    pub fn has_notice(&self, summary: &str) -> bool {
        self.notices.iter().any(|(s, _)| s.contains(summary))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.hints.clear();
        self.notices.clear();
        self.warning_panels.clear();
        self.check_headers.clear();
        self.spinners.clear();
        self.confirms_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.confirms_shown.push(prompt.key.clone());

        if let Some(answer) = self.confirm_responses.get(&prompt.key) {
            return Ok(*answer);
        }
        if let Some(answer) = self.default_confirm_response {
            return Ok(answer);
        }
        Ok(prompt.default_yes)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn start_spinner_indented(&mut self, message: &str, _indent: usize) -> Box<dyn SpinnerHandle> {
        self.start_spinner(message)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_check_header(&mut self, probe_count: usize) {
        self.check_headers.push(probe_count);
        self.headers.push(format!("environment check · {} probes", probe_count));
    }

    fn show_notice(&mut self, summary: &str, detail: &str) {
        self.notices.push((summary.to_string(), detail.to_string()));
    }

    fn show_warning_panel(&mut self, headline: &str, lead: &str, entries: &[String]) {
        self.warning_panels
            .push((headline.to_string(), lead.to_string(), entries.to_vec()));
        self.warnings.push(headline.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished passed.
    Success,
    /// Finished degraded.
    Warning,
    /// Finished failed.
    Error,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_warning(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Warning);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_confirm_with_response() {
        let mut ui = MockUI::new();
        ui.set_confirm_response("accept", false);

        let prompt = Prompt::new("accept", "I Understand and Accept");
        let answer = ui.confirm(&prompt).unwrap();

        assert!(!answer);
        assert_eq!(ui.confirms_shown(), &["accept"]);
    }

    #[test]
    fn mock_ui_confirm_falls_back_to_prompt_default() {
        let mut ui = MockUI::new();

        let prompt = Prompt::new("accept", "I Understand and Accept");
        assert!(ui.confirm(&prompt).unwrap());

        let declined = Prompt::new("retry", "Run again?").default_no();
        assert!(!ui.confirm(&declined).unwrap());
    }

    #[test]
    fn mock_ui_default_confirm_response_beats_prompt_default() {
        let mut ui = MockUI::new();
        ui.set_default_confirm_response(false);

        let prompt = Prompt::new("accept", "I Understand and Accept");
        assert!(!ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn mock_ui_captures_spinners() {
        let mut ui = MockUI::new();

        let _spinner = ui.start_spinner("[1/5] Browser Compatibility");
        let _indented = ui.start_spinner_indented("[2/5] Screen Size Check", 2);

        assert_eq!(
            ui.spinners(),
            &["[1/5] Browser Compatibility", "[2/5] Screen Size Check"]
        );
    }

    #[test]
    fn mock_ui_captures_headers() {
        let mut ui = MockUI::new();

        ui.show_header("Security Rules");
        ui.show_check_header(5);

        assert_eq!(ui.headers().len(), 2);
        assert_eq!(ui.check_headers(), &[5]);
    }

    #[test]
    fn mock_ui_captures_notices() {
        let mut ui = MockUI::new();

        ui.show_notice(
            "No tab switching allowed during the competition",
            "Switching tabs may result in disqualification",
        );

        assert!(ui.has_notice("No tab switching"));
        assert_eq!(ui.notices().len(), 1);
    }

    #[test]
    fn mock_ui_captures_warning_panels() {
        let mut ui = MockUI::new();

        ui.show_warning_panel(
            "Some checks have warnings",
            "You can continue, but you might experience some issues during the competition:",
            &["Fullscreen mode not supported".to_string()],
        );

        assert_eq!(ui.warning_panels().len(), 1);
        let (headline, _, entries) = &ui.warning_panels()[0];
        assert_eq!(headline, "Some checks have warnings");
        assert_eq!(entries, &["Fullscreen mode not supported".to_string()]);
        // Panel headline also lands in warnings for has_warning checks
        assert!(ui.has_warning("Some checks have warnings"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.show_check_header(5);
        ui.show_notice("summary", "detail");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.check_headers().is_empty());
        assert!(ui.notices().is_empty());
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Loading probe plan");
        ui.success("Environment check passed");
        ui.error("Plan not found");
        ui.show_hint("Run greenroom probes");

        assert!(ui.has_message("probe plan"));
        assert!(ui.has_success("check passed"));
        assert!(ui.has_error("not found"));
        assert!(ui.has_hint("greenroom probes"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn mock_ui_is_not_interactive_by_default() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_spinner_captures_finish() {
        let mut spinner = MockSpinner::new();

        spinner.set_message("Checking...");
        spinner.finish_success("Your browser is compatible.");

        assert_eq!(spinner.messages(), &["Checking..."]);
        assert_eq!(spinner.finish_message(), Some("Your browser is compatible."));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Success));
    }

    #[test]
    fn mock_spinner_warning_status() {
        let mut spinner = MockSpinner::new();
        spinner.finish_warning("Fullscreen mode is not supported in your browser.");

        assert_eq!(spinner.status(), Some(SpinnerStatus::Warning));
    }

    #[test]
    fn mock_spinner_error_status() {
        let mut spinner = MockSpinner::new();
        spinner.finish_error("Failed!");

        assert_eq!(spinner.status(), Some(SpinnerStatus::Error));
    }
}
