//! Session conduct: the rule catalog and the violation budget.
//!
//! - [`rules`] - Conduct rules, notices, and reason classification
//! - [`monitor`] - The violation budget for a live session

pub mod monitor;
pub mod rules;

pub use monitor::{Violation, ViolationMonitor, ViolationOutcome, MAX_VIOLATIONS};
pub use rules::{
    assess, broken_rules, ConductNotice, ConductRule, RuleAssessment, CONDUCT_NOTICES,
    CONDUCT_RULES, DEFAULT_REASON, FALLBACK_BROKEN_RULES,
};
