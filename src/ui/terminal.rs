//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    confirm_user, should_use_colors, GreenroomTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: GreenroomTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GreenroomTheme::new()
        } else {
            GreenroomTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        confirm_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn start_spinner_indented(&mut self, message: &str, indent: usize) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::with_indent(message, indent))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_banners() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_check_header(&mut self, probe_count: usize) {
        if self.mode.shows_banners() {
            let probe_label = if probe_count == 1 { "probe" } else { "probes" };
            writeln!(
                self.term,
                "\n{} {} {} {}\n",
                self.theme.header.apply_to("🎬"),
                self.theme.highlight.apply_to("greenroom"),
                self.theme.dim.apply_to("· environment check"),
                self.theme
                    .dim
                    .apply_to(format!("· {} {}", probe_count, probe_label)),
            )
            .ok();
        }
    }

    fn show_notice(&mut self, summary: &str, detail: &str) {
        if self.mode.shows_banners() {
            writeln!(
                self.term,
                "  {} {}",
                self.theme.info.apply_to("•"),
                self.theme.highlight.apply_to(summary),
            )
            .ok();
            writeln!(self.term, "    {}", self.theme.dim.apply_to(detail)).ok();
        }
    }

    fn show_warning_panel(&mut self, headline: &str, lead: &str, entries: &[String]) {
        if !self.mode.shows_status() {
            return;
        }

        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Warnings ─────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("│"),
            self.theme.warning.apply_to(format!("⚠ {}", headline)),
        )
        .ok();
        writeln!(self.term, "  {} {}", b.apply_to("│"), lead).ok();
        for entry in entries {
            writeln!(
                self.term,
                "  {} {}",
                b.apply_to("│"),
                self.theme.dim.apply_to(format!("- {}", entry)),
            )
            .ok();
        }
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_banners() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
            writeln!(self.term).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
