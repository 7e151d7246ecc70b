//! The readiness check: probes, sequencing, and the completion gate.
//!
//! A check runs a planned list of probes in a fixed order against a
//! [`Platform`](crate::platform::Platform), records one outcome per probe,
//! logs every degraded capability, and ends in a single verdict. The
//! pieces live in:
//!
//! - [`probes`] - The probe catalog and the probe bodies
//! - [`outcome`] - Statuses, outcomes, and the final verdict
//! - [`registry`] - Result slots and sequence step counters
//! - [`warnings`] - The append-only degraded-capability log
//! - [`sequencer`] - Runs a plan start to finish
//! - [`gate`] - Releases the caller's continuation on acknowledgement
//!
//! # Example
//!
//! ```
//! use greenroom::check::{SequencePlan, Sequencer, Verdict, PROBE_DEFS};
//! use greenroom::platform::MockPlatform;
//!
//! let platform = MockPlatform::ready().with_fullscreen(false);
//! let plan = SequencePlan {
//!     probes: PROBE_DEFS[..4].to_vec(),
//!     ..SequencePlan::immediate()
//! };
//! let check = Sequencer::new(plan, platform).run();
//!
//! assert_eq!(check.verdict, Verdict::Degraded { warnings: 1 });
//! assert_eq!(check.warnings.entries(), ["Fullscreen mode not supported"]);
//! ```

pub mod gate;
pub mod outcome;
pub mod probes;
pub mod registry;
pub mod sequencer;
pub mod warnings;

pub use gate::{CompletionGate, GateResponse};
pub use outcome::{ProbeOutcome, ProbeStatus, Verdict};
pub use probes::{find_probe, ProbeDef, ProbeFn, ProbeParams, PROBE_DEFS};
pub use registry::{ProbeRegistry, ProbeSlot, SequenceState};
pub use sequencer::{
    CheckProgress, CompletedCheck, SequencePhase, SequencePlan, Sequencer,
    DEFAULT_PROBE_TIMEOUT, DEFAULT_SETTLE_DELAY,
};
pub use warnings::WarningLog;
