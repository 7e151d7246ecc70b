//! Readiness report assembly and rendering.
//!
//! A report freezes a finished check into a serializable record: one row
//! per probe, the warning log, the verdict, and a timestamp. The caller
//! supplies the timestamp so report content never depends on ambient
//! wall-clock reads; [`ReadinessReport::now`] binds the real clock.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::check::{CompletedCheck, ProbeStatus, Verdict};
use crate::error::Result;

/// One probe row in the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub title: String,
    pub status: ProbeStatus,
    pub message: String,
}

/// The record handed to the contestant and the proctoring layer after a
/// check finishes.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,

    /// Aggregate verdict, flattened into the report object.
    #[serde(flatten)]
    pub verdict: Verdict,

    /// One row per probe, in execution order.
    pub probes: Vec<ReportRow>,

    /// Degraded-capability log, in execution order.
    pub warning_log: Vec<String>,

    /// Wall-clock duration of the check run.
    pub duration_ms: u64,
}

impl ReadinessReport {
    /// Assemble a report from a finished check, stamped with the given
    /// instant.
    pub fn from_check(check: &CompletedCheck, generated_at: DateTime<Utc>) -> Self {
        let probes = check
            .registry
            .slots()
            .iter()
            .map(|slot| ReportRow {
                name: slot.name.clone(),
                title: slot.title.clone(),
                status: slot.outcome.status,
                message: slot.outcome.message.clone(),
            })
            .collect();

        Self {
            generated_at,
            verdict: check.verdict,
            probes,
            warning_log: check.warnings.entries().to_vec(),
            duration_ms: check.duration.as_millis() as u64,
        }
    }

    /// Assemble a report stamped with the current time.
    pub fn now(check: &CompletedCheck) -> Self {
        Self::from_check(check, Utc::now())
    }

    /// Pretty-printed JSON for the proctoring layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering, one row per probe with the warning log and
    /// verdict underneath.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Readiness report generated at {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let width = self
            .probes
            .iter()
            .map(|row| row.title.len())
            .max()
            .unwrap_or(0);
        for row in &self.probes {
            out.push_str(&format!(
                "  {} {:<width$}  {}\n",
                row.status.display_char(),
                row.title,
                row.message,
                width = width
            ));
        }

        if !self.warning_log.is_empty() {
            out.push_str("\nWarnings:\n");
            for warning in &self.warning_log {
                out.push_str(&format!("  - {}\n", warning));
            }
        }

        out.push_str(&format!("\nVerdict: {}\n", self.verdict));
        out
    }
}
