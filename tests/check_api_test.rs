//! Integration tests for the check public API.

use greenroom::check::{
    CheckProgress, CompletionGate, GateResponse, ProbeDef, ProbeOutcome, ProbeParams, ProbeStatus,
    SequencePlan, Sequencer, Verdict, PROBE_DEFS,
};
use greenroom::config::discover_plan;
use greenroom::platform::{MockPlatform, NotificationPermission, Platform, RequestOutcome};
use greenroom::report::ReadinessReport;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn public_api_accessible() {
    // Verify all public types are accessible
    let _plan = SequencePlan::default();
    let _verdict: Verdict = Verdict::Clean;
    let _params = ProbeParams::default();
    let _platform = MockPlatform::ready();
}

/// Full catalog without pacing, with a benchmark loop short enough to
/// stay inside its budget even in unoptimized test builds.
fn quick_catalog() -> SequencePlan {
    SequencePlan {
        params: ProbeParams {
            benchmark_iterations: 1_000,
            ..ProbeParams::default()
        },
        ..SequencePlan::immediate()
    }
}

#[test]
fn full_check_workflow_on_a_healthy_host() {
    // 1. Plan the whole catalog without pacing
    let plan = quick_catalog();

    // 2. Run it against a fully capable host
    let check = Sequencer::new(plan, MockPlatform::ready()).run();

    // 3. Every slot resolved, in catalog order
    let names: Vec<&str> = check
        .registry
        .slots()
        .iter()
        .map(|slot| slot.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["browser", "screenSize", "fullscreen", "notifications", "performance"]
    );
    assert!(check.registry.all_resolved());
    assert!(check.state.all_complete());

    // 4. Clean verdict, empty warning log
    assert_eq!(check.verdict, Verdict::Clean);
    assert!(check.warnings.is_empty());
}

#[test]
fn degraded_host_collects_warnings_in_probe_order() {
    let platform = MockPlatform::ready()
        .with_viewport(640, 480)
        .with_fullscreen(false)
        .with_permission(NotificationPermission::Denied);
    let check = Sequencer::new(quick_catalog(), platform).run();

    assert_eq!(check.verdict, Verdict::Degraded { warnings: 3 });
    assert_eq!(
        check.warnings.entries(),
        [
            "Screen size is smaller than recommended",
            "Fullscreen mode not supported",
            "Notifications not enabled",
        ]
    );

    let screen = check.registry.get("screenSize").unwrap();
    assert_eq!(screen.outcome.status, ProbeStatus::Warning);
    assert_eq!(
        screen.outcome.message,
        "Your screen size (640x480) is smaller than recommended (768x600)."
    );
}

#[test]
fn unrecognized_client_degrades_the_browser_probe() {
    let platform = MockPlatform::ready().with_user_agent("Lynx/2.9.0dev.10");
    let check = Sequencer::new(quick_catalog(), platform).run();

    let browser = check.registry.get("browser").unwrap();
    assert_eq!(browser.outcome.status, ProbeStatus::Warning);
    assert_eq!(
        browser.outcome.message,
        "Your browser may not be fully compatible. We recommend using Chrome, Firefox, or Safari."
    );
    assert_eq!(check.verdict, Verdict::Degraded { warnings: 1 });
}

#[test]
fn unprompted_permission_is_requested_exactly_once() {
    let platform = MockPlatform::ready()
        .with_permission(NotificationPermission::Unprompted)
        .with_request_outcome(RequestOutcome::Grant);
    // Clones share the request counter, so this handle observes requests
    // made through the copy the sequencer consumes.
    let handle = platform.clone();

    let check = Sequencer::new(quick_catalog(), platform).run();

    assert_eq!(handle.permission_requests(), 1);
    assert_eq!(
        check.registry.get("notifications").unwrap().outcome.status,
        ProbeStatus::Passed
    );
    assert_eq!(check.verdict, Verdict::Clean);
}

#[test]
fn failed_permission_request_degrades_instead_of_erroring() {
    let platform = MockPlatform::ready()
        .with_permission(NotificationPermission::Unprompted)
        .with_request_outcome(RequestOutcome::Fail("prompt dismissed".into()));
    let check = Sequencer::new(quick_catalog(), platform).run();

    let slot = check.registry.get("notifications").unwrap();
    assert_eq!(slot.outcome.status, ProbeStatus::Warning);
    assert_eq!(
        slot.outcome.message,
        "Could not request notification permission."
    );
    assert!(check.state.all_complete());
}

#[test]
fn progress_events_arrive_in_order() {
    let mut events = Vec::new();
    let check = Sequencer::new(quick_catalog(), MockPlatform::ready())
        .run_with_progress(|progress| match progress {
            CheckProgress::ProbeStarting {
                name, index, total, ..
            } => {
                events.push(format!("start {index}/{total} {name}"));
            }
            CheckProgress::ProbeFinished { name, outcome, .. } => {
                events.push(format!("finish {name} {}", outcome.status));
            }
            CheckProgress::SequenceComplete { verdict } => {
                events.push(format!("complete {verdict}"));
            }
        });

    assert_eq!(events.len(), PROBE_DEFS.len() * 2 + 1);
    assert_eq!(events[0], "start 0/5 browser");
    assert_eq!(events[1], "finish browser passed");
    assert_eq!(events[8], "start 4/5 performance");
    assert_eq!(events.last().unwrap(), "complete clean");
    assert!(check.state.all_complete());
}

#[test]
fn plan_file_thresholds_flow_into_the_run() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("greenroom.yml"),
        "probes:\n  - screenSize\nmin_width: 2000\nsettle_delay_ms: 0\n",
    )
    .unwrap();

    let plan = discover_plan(temp.path()).unwrap().to_plan().unwrap();
    let check = Sequencer::new(plan, MockPlatform::ready()).run();

    assert_eq!(check.registry.len(), 1);
    assert_eq!(check.verdict, Verdict::Degraded { warnings: 1 });
    assert_eq!(
        check.registry.get("screenSize").unwrap().outcome.message,
        "Your screen size (1920x1080) is smaller than recommended (2000x600)."
    );
}

fn stalling_probe(_params: &ProbeParams, _platform: &mut dyn Platform) -> ProbeOutcome {
    std::thread::sleep(Duration::from_millis(300));
    ProbeOutcome::passed("finished late")
}

#[test]
fn probe_past_its_deadline_resolves_as_a_warning() {
    let plan = SequencePlan {
        probes: vec![ProbeDef {
            name: "stall",
            title: "Stalling Probe",
            caption: "Stalling...",
            warning_log: "Stalling probe degraded",
            run: stalling_probe,
        }],
        probe_timeout: Some(Duration::from_millis(25)),
        ..SequencePlan::immediate()
    };
    let check = Sequencer::new(plan, MockPlatform::ready()).run();

    let slot = check.registry.get("stall").unwrap();
    assert_eq!(slot.outcome.status, ProbeStatus::Warning);
    assert_eq!(
        slot.outcome.message,
        "Stalling Probe did not complete in time."
    );
    assert_eq!(check.warnings.entries(), ["Stalling Probe timed out"]);
    assert_eq!(check.verdict, Verdict::Degraded { warnings: 1 });
}

#[test]
fn settle_delay_paces_the_sequence() {
    let plan = SequencePlan {
        probes: PROBE_DEFS[..2].to_vec(),
        settle_delay: Duration::from_millis(25),
        ..SequencePlan::immediate()
    };
    let check = Sequencer::new(plan, MockPlatform::ready()).run();

    // Two probes, one settle pause before each.
    assert!(check.duration >= Duration::from_millis(50));
}

#[test]
fn acknowledgement_gate_end_to_end() {
    // 1. Finish a clean run
    let check = Sequencer::new(quick_catalog(), MockPlatform::ready()).run();

    // 2. Acknowledge it: the continuation fires once with the verdict
    let mut released = Vec::new();
    {
        let mut gate = CompletionGate::new(|verdict| released.push(verdict));
        assert!(gate.is_enabled(&check.state));
        assert_eq!(gate.acknowledge_completed(&check), GateResponse::Fired);

        // 3. A second acknowledgement is absorbed
        assert_eq!(gate.acknowledge_completed(&check), GateResponse::AlreadyFired);
    }
    assert_eq!(released, [Verdict::Clean]);
}

#[test]
fn report_freezes_a_degraded_run() {
    let platform = MockPlatform::ready().with_fullscreen(false);
    let plan = SequencePlan {
        probes: PROBE_DEFS[..4].to_vec(),
        ..SequencePlan::immediate()
    };
    let check = Sequencer::new(plan, platform).run();
    let report = ReadinessReport::now(&check);

    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["verdict"], "degraded");
    assert_eq!(value["warnings"], 1);
    assert_eq!(value["probes"].as_array().unwrap().len(), 4);
    assert_eq!(value["probes"][2]["name"], "fullscreen");
    assert_eq!(value["probes"][2]["status"], "warning");
    assert_eq!(value["warning_log"][0], "Fullscreen mode not supported");

    let text = report.render_text();
    assert!(text.contains("⚠ Fullscreen Capability"));
    assert!(text.contains("Verdict: degraded (1 warning)"));
}

#[test]
fn empty_probe_list_completes_clean() {
    let plan = SequencePlan {
        probes: Vec::new(),
        ..SequencePlan::immediate()
    };
    let check = Sequencer::new(plan, MockPlatform::ready()).run();

    assert!(check.registry.is_empty());
    assert!(check.state.all_complete());
    assert_eq!(check.verdict, Verdict::Clean);
}
