//! Probe outcome types.
//!
//! Each capability probe resolves its slot to a `ProbeOutcome` carrying a
//! status and a human-readable message. A finished sequence collapses into
//! a single [`Verdict`] for the caller.

use serde::{Deserialize, Serialize};

/// Status of a single capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// Probe has not run yet.
    Pending,

    /// Capability is fully available.
    Passed,

    /// Capability is degraded or absent; the check may still proceed.
    Warning,

    /// Irrecoverable failure. Reserved: no current probe produces it.
    Failed,
}

impl ProbeStatus {
    /// Check if the probe has resolved (no more changes expected).
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ProbeStatus::Pending)
    }

    /// Whether this status contributes to the warning count.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ProbeStatus::Warning | ProbeStatus::Failed)
    }

    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            ProbeStatus::Pending => '○',
            ProbeStatus::Passed => '✓',
            ProbeStatus::Warning => '⚠',
            ProbeStatus::Failed => '✗',
        }
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProbeStatus::Pending => "pending",
            ProbeStatus::Passed => "passed",
            ProbeStatus::Warning => "warning",
            ProbeStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// What a probe resolved to: a status plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Resolved status.
    pub status: ProbeStatus,

    /// Human-readable description of the measured value and outcome.
    pub message: String,
}

impl ProbeOutcome {
    /// Outcome for a capability that is fully available.
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Passed,
            message: message.into(),
        }
    }

    /// Outcome for a degraded capability. Non-blocking.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Warning,
            message: message.into(),
        }
    }

    /// The unresolved slot placeholder used before a probe runs.
    pub fn pending() -> Self {
        Self {
            status: ProbeStatus::Pending,
            message: String::new(),
        }
    }
}

/// Aggregate outcome of a completed readiness sequence.
///
/// Handed to the completion gate's continuation so downstream code can
/// distinguish a clean pass from a degraded one without re-reading the
/// warning log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "verdict")]
pub enum Verdict {
    /// Every probe passed.
    Clean,

    /// At least one probe resolved with a warning.
    Degraded {
        /// Number of degraded probes.
        warnings: usize,
    },
}

impl Verdict {
    /// Derive the verdict from a warning count.
    pub fn from_warning_count(warnings: usize) -> Self {
        if warnings == 0 {
            Verdict::Clean
        } else {
            Verdict::Degraded { warnings }
        }
    }

    /// Whether every probe passed.
    pub fn is_clean(&self) -> bool {
        matches!(self, Verdict::Clean)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Clean => write!(f, "clean"),
            Verdict::Degraded { warnings: 1 } => write!(f, "degraded (1 warning)"),
            Verdict::Degraded { warnings } => write!(f, "degraded ({} warnings)", warnings),
        }
    }
}
