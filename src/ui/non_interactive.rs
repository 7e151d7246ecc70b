//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::theme::GreenroomTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirm prompts are never shown. Answers come from
/// `GREENROOM_PROMPT_<KEY>` environment variables when set, otherwise
/// from the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect GREENROOM_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("GREENROOM_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("GREENROOM_PROMPT_{}", prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            let answer = matches!(
                value.to_lowercase().as_str(),
                "true" | "yes" | "y" | "1"
            );
            return Ok(answer);
        }

        Ok(prompt.default_yes)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.start_spinner_indented(message, 0)
    }

    fn start_spinner_indented(&mut self, message: &str, indent: usize) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            let prefix = " ".repeat(indent);
            println!("{}{}", prefix, message);
        }
        Box::new(NoopSpinner {
            indent,
            silent: !self.mode.shows_spinners(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_banners() {
            println!("\n{}\n", title);
        }
    }

    fn show_check_header(&mut self, probe_count: usize) {
        if self.mode.shows_banners() {
            let probe_label = if probe_count == 1 { "probe" } else { "probes" };
            println!(
                "\n🎬 greenroom · environment check · {} {}\n",
                probe_count, probe_label
            );
        }
    }

    fn show_notice(&mut self, summary: &str, detail: &str) {
        if self.mode.shows_banners() {
            println!("  • {}", summary);
            println!("    {}", detail);
        }
    }

    fn show_warning_panel(&mut self, headline: &str, lead: &str, entries: &[String]) {
        if !self.mode.shows_status() {
            return;
        }

        println!();
        println!("  ┌─ Warnings ─────────────────────────");
        println!("  │ ⚠ {}", headline);
        println!("  │ {}", lead);
        for entry in entries {
            println!("  │ - {}", entry);
        }
        println!("  └────────────────────────────────────");
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_banners() {
            println!("  💡 {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner {
    indent: usize,
    silent: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        let prefix = " ".repeat(self.indent);
        let theme = GreenroomTheme::plain();
        println!("{}{}", prefix, theme.format_success(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        let prefix = " ".repeat(self.indent);
        let theme = GreenroomTheme::plain();
        println!("{}{}", prefix, theme.format_warning(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        if self.silent {
            return;
        }
        let prefix = " ".repeat(self.indent);
        let theme = GreenroomTheme::plain();
        println!("{}{}", prefix, theme.format_error(msg));
    }
}
