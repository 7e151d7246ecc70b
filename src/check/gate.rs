//! Acknowledgement gate between a finished sequence and what comes after.
//!
//! The gate holds the caller's continuation and releases it exactly once,
//! and only once every probe has resolved. Acknowledging early is a no-op
//! so a stray confirmation can never skip the check.

use super::outcome::Verdict;
use super::registry::{ProbeRegistry, SequenceState};
use super::sequencer::CompletedCheck;

/// What an acknowledgement attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResponse {
    /// The continuation ran with the final verdict.
    Fired,

    /// The sequence has not completed; nothing happened.
    NotReady,

    /// The continuation already ran on an earlier acknowledgement.
    AlreadyFired,
}

/// Holds the continuation until the operator acknowledges the results.
pub struct CompletionGate<F: FnOnce(Verdict)> {
    continuation: Option<F>,
}

impl<F: FnOnce(Verdict)> CompletionGate<F> {
    pub fn new(continuation: F) -> Self {
        Self {
            continuation: Some(continuation),
        }
    }

    /// Whether acknowledging now would fire the continuation.
    pub fn is_enabled(&self, state: &SequenceState) -> bool {
        state.all_complete() && self.continuation.is_some()
    }

    /// Acknowledge the results. Fires the continuation with the verdict
    /// drawn from the registry, but only once the sequence has completed.
    pub fn acknowledge(
        &mut self,
        state: &SequenceState,
        registry: &ProbeRegistry,
    ) -> GateResponse {
        if !state.all_complete() {
            return GateResponse::NotReady;
        }
        match self.continuation.take() {
            Some(continuation) => {
                continuation(registry.verdict());
                GateResponse::Fired
            }
            None => GateResponse::AlreadyFired,
        }
    }

    /// Acknowledge a finished run.
    pub fn acknowledge_completed(&mut self, check: &CompletedCheck) -> GateResponse {
        self.acknowledge(&check.state, &check.registry)
    }
}
