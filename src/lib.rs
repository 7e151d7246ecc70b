//! Greenroom - Pre-competition environment readiness checks.
//!
//! Greenroom runs a sequence of capability probes against the hosting
//! environment before a proctored coding contest begins, reports every
//! degraded capability without blocking, and withholds the ready signal
//! until the contestant accepts the results.
//!
//! # Modules
//!
//! - [`check`] - The probe catalog, sequencing, and the completion gate
//! - [`cli`] - Command-line interface and argument parsing
//! - [`conduct`] - Conduct rules and the session violation budget
//! - [`config`] - Check plan loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Host environment access behind a mockable trait
//! - [`report`] - Readiness report assembly and rendering
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use greenroom::check::{SequencePlan, Sequencer, Verdict, PROBE_DEFS};
//! use greenroom::platform::MockPlatform;
//!
//! // Probe the client, viewport, and fullscreen support of a healthy host
//! let plan = SequencePlan {
//!     probes: PROBE_DEFS[..3].to_vec(),
//!     ..SequencePlan::immediate()
//! };
//! let check = Sequencer::new(plan, MockPlatform::ready()).run();
//! assert_eq!(check.verdict, Verdict::Clean);
//! ```
//!
//! For the end-to-end acceptance flow, see the integration tests.

pub mod check;
pub mod cli;
pub mod conduct;
pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod ui;

pub use error::{GreenroomError, Result};
