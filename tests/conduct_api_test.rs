//! Integration tests for the conduct public API.

use greenroom::conduct::{
    assess, broken_rules, Violation, ViolationMonitor, ViolationOutcome, CONDUCT_NOTICES,
    CONDUCT_RULES, FALLBACK_BROKEN_RULES, MAX_VIOLATIONS,
};

fn broken(reason: &str) -> Vec<&'static str> {
    assess(reason)
        .into_iter()
        .filter(|assessment| assessment.broken)
        .map(|assessment| assessment.rule)
        .collect()
}

#[test]
fn public_api_accessible() {
    // Verify the catalogs are accessible and non-trivial
    assert_eq!(CONDUCT_RULES.len(), 6);
    assert_eq!(CONDUCT_NOTICES.len(), 3);
    assert_eq!(MAX_VIOLATIONS, 2);
    let _monitor = ViolationMonitor::default();
}

#[test]
fn session_survives_the_budget_then_ends() {
    let mut monitor = ViolationMonitor::new();

    // 1. Violations inside the budget warn and keep the session alive
    for expected in 1..=MAX_VIOLATIONS {
        let outcome = monitor.record(Violation::TabSwitch);
        assert_eq!(
            outcome,
            ViolationOutcome::Warned {
                reason: "Tab or window switching detected",
                count: expected,
                max: MAX_VIOLATIONS,
            }
        );
    }
    assert!(!monitor.is_disqualified());

    // 2. The next violation ends the session
    let outcome = monitor.record(Violation::ContextMenu);
    assert_eq!(
        outcome,
        ViolationOutcome::Disqualified {
            reason: "Attempt to use context menu".to_string(),
        }
    );
    assert!(monitor.is_disqualified());

    // 3. The reason of record feeds the rule assessment
    let reason = monitor.disqualification_reason().unwrap();
    assert_eq!(broken(reason), ["Do not use the context menu (right-click)"]);
}

#[test]
fn fullscreen_exit_ends_the_session_immediately() {
    let mut monitor = ViolationMonitor::new();

    let outcome = monitor.record(Violation::FullscreenExit);
    assert_eq!(
        outcome,
        ViolationOutcome::Disqualified {
            reason: "Exited fullscreen mode during examination".to_string(),
        }
    );
    assert_eq!(monitor.count(), 0);

    assert_eq!(
        broken("Exited fullscreen mode during examination"),
        ["Remain in fullscreen mode during the entire exam"]
    );
}

#[test]
fn reason_of_record_never_changes() {
    let mut monitor = ViolationMonitor::new();
    monitor.record(Violation::FullscreenExit);

    let later = monitor.record(Violation::PasteContent);
    assert_eq!(
        later,
        ViolationOutcome::Disqualified {
            reason: "Exited fullscreen mode during examination".to_string(),
        }
    );
    assert_eq!(
        monitor.disqualification_reason(),
        Some("Exited fullscreen mode during examination")
    );
}

#[test]
fn broken_rules_with_and_without_a_reason() {
    assert_eq!(
        broken_rules(Some("Attempt to save page")),
        ["Attempt to save page"]
    );
    assert_eq!(broken_rules(None), FALLBACK_BROKEN_RULES);
}

#[test]
fn assessment_serializes_for_the_proctoring_layer() {
    let assessments = assess("Attempt to open developer tools");
    let json = serde_json::to_string(&assessments).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().unwrap().len(), CONDUCT_RULES.len());
    assert_eq!(value[3]["rule"], "Do not attempt to access developer tools");
    assert_eq!(value[3]["broken"], true);
    assert_eq!(value[0]["broken"], false);
}

#[test]
fn warned_outcome_renders_the_banner_line() {
    let mut monitor = ViolationMonitor::new();
    let outcome = monitor.record(Violation::DevToolsShortcut);
    assert_eq!(
        outcome.to_string(),
        "Security violation: Attempt to open developer tools. Warning 1/2"
    );
}
