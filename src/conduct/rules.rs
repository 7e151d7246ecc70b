//! Conduct rules shown to contestants and matched against violations.
//!
//! Every rule pairs the wording shown to the contestant with the keywords
//! that tie a reported violation reason back to it. Matching is a
//! case-sensitive substring check over the reason line, which is how the
//! proctoring layer reports its reasons.

use serde::Serialize;

/// A conduct rule and the reason keywords that mark it broken.
#[derive(Debug, Clone, Copy)]
pub struct ConductRule {
    /// Rule wording shown to the contestant.
    pub rule: &'static str,

    /// Substrings of a violation reason that implicate this rule.
    pub keywords: &'static [&'static str],
}

impl ConductRule {
    /// Whether the reported reason implicates this rule.
    pub fn is_broken_by(&self, reason: &str) -> bool {
        self.keywords.iter().any(|keyword| reason.contains(keyword))
    }
}

/// The full rule catalog, in display order.
pub const CONDUCT_RULES: &[ConductRule] = &[
    ConductRule {
        rule: "Remain in fullscreen mode during the entire exam",
        keywords: &["fullscreen"],
    },
    ConductRule {
        rule: "Do not switch tabs or minimize the browser",
        keywords: &["Tab", "window"],
    },
    ConductRule {
        rule: "Do not use keyboard shortcuts (Ctrl+C, Ctrl+V, etc.)",
        keywords: &["keyboard", "copy", "paste"],
    },
    ConductRule {
        rule: "Do not attempt to access developer tools",
        keywords: &["developer"],
    },
    ConductRule {
        rule: "Do not use the context menu (right-click)",
        keywords: &["context menu"],
    },
    ConductRule {
        rule: "Take the exam without external assistance",
        keywords: &[],
    },
];

/// Reason of record when no specific violation reason is known.
pub const DEFAULT_REASON: &str = "Security violation detected";

/// Rules listed as broken when a session ends without a recorded reason.
pub const FALLBACK_BROKEN_RULES: &[&str] = &[
    "Unauthorized exit from fullscreen mode",
    "Tab switching or window minimization detected",
    "Attempt to use prohibited keyboard shortcuts",
];

/// A short notice shown alongside the readiness results, before the
/// contestant accepts.
#[derive(Debug, Clone, Copy)]
pub struct ConductNotice {
    pub summary: &'static str,
    pub detail: &'static str,
}

/// Notices shown with the readiness results.
pub const CONDUCT_NOTICES: &[ConductNotice] = &[
    ConductNotice {
        summary: "No tab switching allowed during the competition",
        detail: "Switching tabs may result in disqualification",
    },
    ConductNotice {
        summary: "External resources not allowed",
        detail: "You may only use the provided editor and documentation",
    },
    ConductNotice {
        summary: "Your work will be submitted automatically",
        detail: "When time expires or if you submit manually",
    },
];

/// One catalog rule judged against a violation reason.
#[derive(Debug, Clone, Serialize)]
pub struct RuleAssessment {
    pub rule: &'static str,
    pub broken: bool,
}

/// Judge every catalog rule against the reported reason, in display order.
pub fn assess(reason: &str) -> Vec<RuleAssessment> {
    CONDUCT_RULES
        .iter()
        .map(|rule| RuleAssessment {
            rule: rule.rule,
            broken: rule.is_broken_by(reason),
        })
        .collect()
}

/// The rules listed as broken for a finished session. A known reason
/// stands alone; an unknown one falls back to the stock list.
pub fn broken_rules(reason: Option<&str>) -> Vec<String> {
    match reason {
        Some(reason) => vec![reason.to_string()],
        None => FALLBACK_BROKEN_RULES
            .iter()
            .map(|rule| rule.to_string())
            .collect(),
    }
}
