//! Violation budget for a live proctored session.
//!
//! The monitor tolerates a fixed number of violations, warning on each,
//! then disqualifies. Leaving fullscreen skips the budget entirely.
//! Disqualification is sticky: once the session is over, every later
//! violation reports the original reason of record.

use std::fmt;

use tracing::warn;

/// Violations tolerated before disqualification.
pub const MAX_VIOLATIONS: usize = 2;

/// A detected breach of session conduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The proctored window lost visibility.
    TabSwitch,

    /// F12 or an inspect shortcut.
    DevToolsShortcut,

    /// Alt+Tab or Ctrl+Tab.
    TabSwitchShortcut,

    /// Ctrl+C, Ctrl+V or Ctrl+X.
    ClipboardShortcut,

    /// Ctrl+P.
    PrintShortcut,

    /// Ctrl+S.
    SaveShortcut,

    /// Ctrl+T or Ctrl+N.
    NewWindowShortcut,

    /// The context menu was opened.
    ContextMenu,

    /// A copy or cut of page content.
    CopyContent,

    /// A paste into the session.
    PasteContent,

    /// Fullscreen was left mid-session. Zero tolerance.
    FullscreenExit,
}

impl Violation {
    /// The reason line reported for this violation.
    pub fn reason(&self) -> &'static str {
        match self {
            Violation::TabSwitch => "Tab or window switching detected",
            Violation::DevToolsShortcut => "Attempt to open developer tools",
            Violation::TabSwitchShortcut => "Attempt to switch tabs",
            Violation::ClipboardShortcut => "Attempt to copy or paste content",
            Violation::PrintShortcut => "Attempt to print page",
            Violation::SaveShortcut => "Attempt to save page",
            Violation::NewWindowShortcut => "Attempt to open new tab/window",
            Violation::ContextMenu => "Attempt to use context menu",
            Violation::CopyContent => "Attempt to copy content",
            Violation::PasteContent => "Attempt to paste content",
            Violation::FullscreenExit => "Exited fullscreen mode during examination",
        }
    }

    /// Whether this violation skips the warning budget.
    pub fn zero_tolerance(&self) -> bool {
        matches!(self, Violation::FullscreenExit)
    }
}

/// What recording a violation did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationOutcome {
    /// Inside the warning budget; the session continues.
    Warned {
        reason: &'static str,
        count: usize,
        max: usize,
    },

    /// The session is over.
    Disqualified { reason: String },
}

impl fmt::Display for ViolationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationOutcome::Warned { reason, count, max } => {
                write!(f, "Security violation: {reason}. Warning {count}/{max}")
            }
            ViolationOutcome::Disqualified { reason } => write!(f, "Disqualified: {reason}"),
        }
    }
}

/// Tracks conduct violations against the warning budget.
#[derive(Debug, Clone)]
pub struct ViolationMonitor {
    max_violations: usize,
    count: usize,
    disqualified_for: Option<String>,
}

impl ViolationMonitor {
    pub fn new() -> Self {
        Self::with_budget(MAX_VIOLATIONS)
    }

    /// Monitor with a custom warning budget.
    pub fn with_budget(max_violations: usize) -> Self {
        Self {
            max_violations,
            count: 0,
            disqualified_for: None,
        }
    }

    /// Warnings issued so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_violations(&self) -> usize {
        self.max_violations
    }

    pub fn is_disqualified(&self) -> bool {
        self.disqualified_for.is_some()
    }

    /// The reason of record, once disqualified.
    pub fn disqualification_reason(&self) -> Option<&str> {
        self.disqualified_for.as_deref()
    }

    /// Record a violation and decide what happens to the session.
    pub fn record(&mut self, violation: Violation) -> ViolationOutcome {
        if self.is_disqualified()
            || violation.zero_tolerance()
            || self.count >= self.max_violations
        {
            return self.disqualify(violation.reason());
        }

        self.count += 1;
        warn!(
            "Security violation: {} ({}/{})",
            violation.reason(),
            self.count,
            self.max_violations
        );
        ViolationOutcome::Warned {
            reason: violation.reason(),
            count: self.count,
            max: self.max_violations,
        }
    }

    /// Disqualify outright, outside the budget. Keeps the first reason
    /// when the session is already over.
    pub fn disqualify(&mut self, reason: &str) -> ViolationOutcome {
        let reason = match &self.disqualified_for {
            Some(original) => original.clone(),
            None => {
                warn!("Session disqualified: {}", reason);
                self.disqualified_for = Some(reason.to_string());
                reason.to_string()
            }
        };
        ViolationOutcome::Disqualified { reason }
    }
}

impl Default for ViolationMonitor {
    fn default() -> Self {
        Self::new()
    }
}
