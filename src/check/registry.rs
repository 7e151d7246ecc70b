//! Probe result registry and sequence progress.
//!
//! The registry holds one named slot per planned probe, in execution order.
//! Slot order is significant: display order equals execution order equals
//! the visible step index. Each slot starts pending and is resolved exactly
//! once by its owning probe's turn.

use super::outcome::{ProbeOutcome, ProbeStatus, Verdict};
use super::probes::ProbeDef;

/// One named result slot.
#[derive(Debug, Clone)]
pub struct ProbeSlot {
    /// Registry key (e.g. `screenSize`).
    pub name: String,

    /// Title shown on the step display.
    pub title: String,

    /// Current outcome; pending until the probe's turn completes.
    pub outcome: ProbeOutcome,
}

/// Ordered collection of named probe results.
#[derive(Debug, Clone, Default)]
pub struct ProbeRegistry {
    slots: Vec<ProbeSlot>,
}

impl ProbeRegistry {
    /// Create a registry with every slot pending, in plan order.
    pub fn new(defs: &[ProbeDef]) -> Self {
        let slots = defs
            .iter()
            .map(|def| ProbeSlot {
                name: def.name.to_string(),
                title: def.title.to_string(),
                outcome: ProbeOutcome::pending(),
            })
            .collect();
        Self { slots }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in execution order.
    pub fn slots(&self) -> &[ProbeSlot] {
        &self.slots
    }

    /// Look up a slot by registry key.
    pub fn get(&self, name: &str) -> Option<&ProbeSlot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Resolve the slot at `index`.
    ///
    /// A slot is resolved exactly once; the sequencer is the only writer.
    pub(crate) fn resolve(&mut self, index: usize, outcome: ProbeOutcome) {
        debug_assert!(
            self.slots[index].outcome.status == ProbeStatus::Pending,
            "slot {index} resolved twice"
        );
        self.slots[index].outcome = outcome;
    }

    /// Whether every slot has left the pending state.
    pub fn all_resolved(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.outcome.status.is_resolved())
    }

    /// Number of slots that resolved degraded.
    pub fn warning_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.outcome.status.is_degraded())
            .count()
    }

    /// Aggregate verdict over the resolved slots.
    pub fn verdict(&self) -> Verdict {
        Verdict::from_warning_count(self.warning_count())
    }
}

/// Visible progress of one sequence run.
///
/// `active_step` only ever moves forward, from 0 up to the registry length.
/// `all_complete` flips once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceState {
    active_step: usize,
    all_complete: bool,
}

impl SequenceState {
    /// Fresh state at the start of a run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next probe to run; equals the probe count when done.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Whether the last probe has resolved.
    pub fn all_complete(&self) -> bool {
        self.all_complete
    }

    /// Move the step pointer past a resolved probe.
    pub(crate) fn advance(&mut self) {
        debug_assert!(!self.all_complete, "advance after completion");
        self.active_step += 1;
    }

    /// Mark the sequence finished. Irreversible.
    pub(crate) fn complete(&mut self) {
        self.all_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::probes::PROBE_DEFS;

    #[test]
    fn new_registry_is_all_pending() {
        let registry = ProbeRegistry::new(PROBE_DEFS);
        assert_eq!(registry.len(), 5);
        assert!(!registry.all_resolved());
        for slot in registry.slots() {
            assert_eq!(slot.outcome.status, ProbeStatus::Pending);
            assert!(slot.outcome.message.is_empty());
        }
    }

    #[test]
    fn slot_order_matches_plan_order() {
        let registry = ProbeRegistry::new(PROBE_DEFS);
        let names: Vec<&str> = registry.slots().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "browser",
                "screenSize",
                "fullscreen",
                "notifications",
                "performance"
            ]
        );
    }

    #[test]
    fn get_finds_slot_by_name() {
        let registry = ProbeRegistry::new(PROBE_DEFS);
        let slot = registry.get("fullscreen").unwrap();
        assert_eq!(slot.title, "Fullscreen Capability");
        assert!(registry.get("telemetry").is_none());
    }

    #[test]
    fn resolve_writes_one_slot() {
        let mut registry = ProbeRegistry::new(PROBE_DEFS);
        registry.resolve(0, ProbeOutcome::passed("Your browser is compatible."));

        assert_eq!(
            registry.get("browser").unwrap().outcome.status,
            ProbeStatus::Passed
        );
        assert_eq!(
            registry.get("screenSize").unwrap().outcome.status,
            ProbeStatus::Pending
        );
    }

    #[test]
    fn warning_count_tracks_degraded_slots() {
        let mut registry = ProbeRegistry::new(PROBE_DEFS);
        registry.resolve(0, ProbeOutcome::passed("ok"));
        registry.resolve(1, ProbeOutcome::warning("small"));
        registry.resolve(2, ProbeOutcome::warning("missing"));

        assert_eq!(registry.warning_count(), 2);
        assert_eq!(registry.verdict(), Verdict::Degraded { warnings: 2 });
    }

    #[test]
    fn all_resolved_and_clean_verdict() {
        let mut registry = ProbeRegistry::new(PROBE_DEFS);
        for i in 0..registry.len() {
            registry.resolve(i, ProbeOutcome::passed("ok"));
        }
        assert!(registry.all_resolved());
        assert_eq!(registry.verdict(), Verdict::Clean);
    }

    #[test]
    fn state_starts_at_zero() {
        let state = SequenceState::new();
        assert_eq!(state.active_step(), 0);
        assert!(!state.all_complete());
    }

    #[test]
    fn state_advances_monotonically() {
        let mut state = SequenceState::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            state.advance();
            seen.push(state.active_step());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn complete_is_sticky() {
        let mut state = SequenceState::new();
        state.complete();
        assert!(state.all_complete());
        state.complete();
        assert!(state.all_complete());
    }
}
