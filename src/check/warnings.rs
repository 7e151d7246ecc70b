//! Warning aggregation.
//!
//! Probes that resolve degraded append one entry here. The log is
//! append-only and order-preserving: entry order equals probe execution
//! order. No deduplication, no severity ranking.

use serde::{Deserialize, Serialize};

/// Append-only collection of degraded-capability messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarningLog {
    entries: Vec<String>,
}

impl WarningLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one warning. Duplicates are kept.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// Number of accumulated warnings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no probe has warned so far.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = WarningLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut log = WarningLog::new();
        log.push("Browser compatibility issues detected");
        log.push("Screen size is smaller than recommended");
        log.push("Notifications not enabled");

        let entries: Vec<&str> = log.iter().collect();
        assert_eq!(
            entries,
            vec![
                "Browser compatibility issues detected",
                "Screen size is smaller than recommended",
                "Notifications not enabled",
            ]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut log = WarningLog::new();
        log.push("Fullscreen mode not supported");
        log.push("Fullscreen mode not supported");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn entries_exposes_slice() {
        let mut log = WarningLog::new();
        log.push("System performance below optimal levels");
        assert_eq!(
            log.entries(),
            &["System performance below optimal levels".to_string()]
        );
    }
}
