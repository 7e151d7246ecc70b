//! Sequencer for the readiness check.
//!
//! The sequencer owns a [`SequencePlan`] and a platform, and runs every
//! planned probe in order on a single logical pass: settle, execute,
//! record, advance. Probes never run concurrently with each other; the
//! only extra thread is the per-probe deadline helper, and a probe that
//! misses its deadline is abandoned there while the sequence moves on.
//!
//! # Example
//!
//! ```
//! use greenroom::check::{SequencePlan, Sequencer};
//! use greenroom::platform::MockPlatform;
//!
//! let sequencer = Sequencer::new(SequencePlan::immediate(), MockPlatform::ready());
//! let check = sequencer.run();
//! assert!(check.state.all_complete());
//! assert!(check.registry.all_resolved());
//! ```

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::platform::Platform;

use super::outcome::{ProbeOutcome, Verdict};
use super::probes::{ProbeDef, ProbeParams, PROBE_DEFS};
use super::registry::{ProbeRegistry, SequenceState};
use super::warnings::WarningLog;

/// Pause before each probe so the step display stays legible.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Deadline for a single probe before it resolves as a warning.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Which probes to run, with what parameters and pacing.
#[derive(Debug, Clone)]
pub struct SequencePlan {
    /// Probes in execution order.
    pub probes: Vec<ProbeDef>,

    /// Thresholds shared by every probe.
    pub params: ProbeParams,

    /// Pause before each probe starts.
    pub settle_delay: Duration,

    /// Per-probe deadline. `None` runs probes on the calling thread
    /// with no deadline at all.
    pub probe_timeout: Option<Duration>,
}

impl Default for SequencePlan {
    fn default() -> Self {
        Self {
            probes: PROBE_DEFS.to_vec(),
            params: ProbeParams::default(),
            settle_delay: DEFAULT_SETTLE_DELAY,
            probe_timeout: Some(DEFAULT_PROBE_TIMEOUT),
        }
    }
}

impl SequencePlan {
    /// The default plan with pacing stripped out: no settle delay and no
    /// deadline helper threads. Used by tests and fast mode.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            probe_timeout: None,
            ..Self::default()
        }
    }
}

/// Where a sequencer is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// Constructed but not started.
    Idle,

    /// The probe at this index is running.
    Running(usize),

    /// Every probe has resolved.
    Complete,
}

/// Progress events emitted while the sequence runs.
#[derive(Debug)]
pub enum CheckProgress<'a> {
    /// A probe is about to start.
    ProbeStarting {
        name: &'a str,
        title: &'a str,
        caption: &'a str,
        index: usize,
        total: usize,
    },

    /// A probe resolved and its slot was written.
    ProbeFinished {
        name: &'a str,
        title: &'a str,
        outcome: &'a ProbeOutcome,
        index: usize,
        total: usize,
    },

    /// The last probe resolved.
    SequenceComplete { verdict: Verdict },
}

/// Everything a finished sequence produced.
#[derive(Debug)]
pub struct CompletedCheck {
    /// Resolved slots, in execution order.
    pub registry: ProbeRegistry,

    /// Degraded-capability log, in execution order.
    pub warnings: WarningLog,

    /// Step counters at the end of the run.
    pub state: SequenceState,

    /// Aggregate verdict over the resolved slots.
    pub verdict: Verdict,

    /// Wall-clock duration of the whole run, settle delays included.
    pub duration: Duration,
}

/// Runs a [`SequencePlan`] against a platform.
pub struct Sequencer<P> {
    plan: SequencePlan,
    platform: P,
    registry: ProbeRegistry,
    warnings: WarningLog,
    state: SequenceState,
    phase: SequencePhase,
}

impl<P: Platform + Clone + Send + 'static> Sequencer<P> {
    pub fn new(plan: SequencePlan, platform: P) -> Self {
        let registry = ProbeRegistry::new(&plan.probes);
        Self {
            plan,
            platform,
            registry,
            warnings: WarningLog::new(),
            state: SequenceState::new(),
            phase: SequencePhase::Idle,
        }
    }

    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    pub fn registry(&self) -> &ProbeRegistry {
        &self.registry
    }

    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    /// Run every planned probe in order and hand back the results.
    pub fn run(self) -> CompletedCheck {
        self.run_with_progress(|_| {})
    }

    /// Run every planned probe in order, reporting progress through the
    /// callback as each one starts and resolves.
    pub fn run_with_progress(
        mut self,
        mut on_progress: impl FnMut(CheckProgress<'_>),
    ) -> CompletedCheck {
        let start = Instant::now();
        let total = self.plan.probes.len();
        let probes = self.plan.probes.clone();

        for (index, def) in probes.iter().enumerate() {
            self.phase = SequencePhase::Running(index);
            on_progress(CheckProgress::ProbeStarting {
                name: def.name,
                title: def.title,
                caption: def.caption,
                index,
                total,
            });

            if !self.plan.settle_delay.is_zero() {
                thread::sleep(self.plan.settle_delay);
            }

            let (outcome, log_entry) = match self.execute_probe(def) {
                Some(outcome) => {
                    let entry = if outcome.status.is_degraded() {
                        Some(def.warning_log.to_string())
                    } else {
                        None
                    };
                    (outcome, entry)
                }
                None => (
                    ProbeOutcome::warning(format!("{} did not complete in time.", def.title)),
                    Some(format!("{} timed out", def.title)),
                ),
            };

            if let Some(entry) = log_entry {
                self.warnings.push(entry);
            }
            self.registry.resolve(index, outcome);
            self.state.advance();

            on_progress(CheckProgress::ProbeFinished {
                name: def.name,
                title: def.title,
                outcome: &self.registry.slots()[index].outcome,
                index,
                total,
            });
        }

        self.state.complete();
        self.phase = SequencePhase::Complete;
        let verdict = self.registry.verdict();
        debug!("Readiness sequence complete: {}", verdict);
        on_progress(CheckProgress::SequenceComplete { verdict });

        CompletedCheck {
            registry: self.registry,
            warnings: self.warnings,
            state: self.state,
            verdict,
            duration: start.elapsed(),
        }
    }

    /// Run one probe, under the plan's deadline when one is set. `None`
    /// means the probe missed the deadline and its helper thread was
    /// abandoned; whatever it eventually produces is discarded.
    fn execute_probe(&mut self, def: &ProbeDef) -> Option<ProbeOutcome> {
        let limit = match self.plan.probe_timeout {
            Some(limit) => limit,
            None => return Some((def.run)(&self.plan.params, &mut self.platform)),
        };

        let run = def.run;
        let params = self.plan.params.clone();
        let mut platform = self.platform.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(run(&params, &mut platform));
        });

        match rx.recv_timeout(limit) {
            Ok(outcome) => Some(outcome),
            Err(_) => {
                warn!(
                    "Probe '{}' missed its {}ms deadline",
                    def.name,
                    limit.as_millis()
                );
                None
            }
        }
    }
}
