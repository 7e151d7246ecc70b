//! Capability probe catalog.
//!
//! Each probe inspects one facility of the hosting environment through the
//! [`Platform`] trait and resolves to passed or warning, never an error:
//! every degraded condition is downgraded so the sequence always finishes.
//!
//! Probes are plain functions listed in [`PROBE_DEFS`]. The sequencer runs
//! whatever descriptor list it is given and never names an individual probe,
//! so reordering or adding probes only touches this table and the plan file.

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;

use crate::platform::{NotificationPermission, Platform};

use super::outcome::ProbeOutcome;

/// Default minimum viewport, in pixels.
pub const DEFAULT_MIN_WIDTH: u32 = 768;
/// Default minimum viewport height, in pixels.
pub const DEFAULT_MIN_HEIGHT: u32 = 600;

/// Default CPU benchmark length.
pub const DEFAULT_BENCHMARK_ITERATIONS: u64 = 10_000_000;
/// Default CPU benchmark budget, in milliseconds.
pub const DEFAULT_BENCHMARK_BUDGET_MS: f64 = 100.0;

/// Client engines considered compatible, matched case-insensitively.
pub const RECOGNIZED_ENGINES: &[&str] = &["chrome", "firefox", "safari"];

/// Threshold parameters shared by the probe operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeParams {
    /// Minimum viewport width in pixels.
    pub min_width: u32,

    /// Minimum viewport height in pixels.
    pub min_height: u32,

    /// CPU benchmark loop length.
    pub benchmark_iterations: u64,

    /// CPU benchmark budget in milliseconds.
    pub benchmark_budget_ms: f64,

    /// Client engine substrings considered compatible.
    pub engines: Vec<String>,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            benchmark_iterations: DEFAULT_BENCHMARK_ITERATIONS,
            benchmark_budget_ms: DEFAULT_BENCHMARK_BUDGET_MS,
            engines: RECOGNIZED_ENGINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A probe operation: reads the platform, resolves to an outcome.
pub type ProbeFn = fn(&ProbeParams, &mut dyn Platform) -> ProbeOutcome;

/// One entry in the probe catalog.
#[derive(Clone, Copy)]
pub struct ProbeDef {
    /// Registry key; stable identity used in plan files and reports.
    pub name: &'static str,

    /// Title shown on the step display.
    pub title: &'static str,

    /// Activity line shown while the probe is running.
    pub caption: &'static str,

    /// Warning-log entry appended when this probe resolves degraded.
    pub warning_log: &'static str,

    /// The probe operation.
    pub run: ProbeFn,
}

impl std::fmt::Debug for ProbeDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeDef")
            .field("name", &self.name)
            .field("title", &self.title)
            .finish()
    }
}

/// Built-in probes in default execution order.
///
/// Display order equals execution order equals the visible step index.
pub const PROBE_DEFS: &[ProbeDef] = &[
    ProbeDef {
        name: "browser",
        title: "Browser Compatibility",
        caption: "Checking if your browser is compatible with our code editor...",
        warning_log: "Browser compatibility issues detected",
        run: probe_browser,
    },
    ProbeDef {
        name: "screenSize",
        title: "Screen Size Check",
        caption: "Checking if your screen size is suitable for coding...",
        warning_log: "Screen size is smaller than recommended",
        run: probe_screen_size,
    },
    ProbeDef {
        name: "fullscreen",
        title: "Fullscreen Capability",
        caption: "Checking if fullscreen mode is supported...",
        warning_log: "Fullscreen mode not supported",
        run: probe_fullscreen,
    },
    ProbeDef {
        name: "notifications",
        title: "Notification Permissions",
        caption: "Checking notification permissions for important alerts...",
        warning_log: "Notifications not enabled",
        run: probe_notifications,
    },
    ProbeDef {
        name: "performance",
        title: "Performance Benchmark",
        caption: "Testing system performance...",
        warning_log: "System performance below optimal levels",
        run: probe_performance,
    },
];

/// Look up a built-in probe by its registry name.
pub fn find_probe(name: &str) -> Option<&'static ProbeDef> {
    PROBE_DEFS.iter().find(|def| def.name == name)
}

/// Client compatibility: substring match against the recognized engines.
fn probe_browser(params: &ProbeParams, platform: &mut dyn Platform) -> ProbeOutcome {
    let agent = platform.user_agent().to_lowercase();
    let recognized = params
        .engines
        .iter()
        .any(|engine| agent.contains(&engine.to_lowercase()));

    if recognized {
        ProbeOutcome::passed("Your browser is compatible.")
    } else {
        ProbeOutcome::warning(
            "Your browser may not be fully compatible. \
             We recommend using Chrome, Firefox, or Safari.",
        )
    }
}

/// Viewport dimensions against the recommended minimum.
fn probe_screen_size(params: &ProbeParams, platform: &mut dyn Platform) -> ProbeOutcome {
    let (width, height) = platform.viewport();
    let adequate = width >= params.min_width && height >= params.min_height;

    if adequate {
        ProbeOutcome::passed(format!(
            "Your screen size ({}x{}) is adequate.",
            width, height
        ))
    } else {
        ProbeOutcome::warning(format!(
            "Your screen size ({}x{}) is smaller than recommended ({}x{}).",
            width, height, params.min_width, params.min_height
        ))
    }
}

/// Fullscreen-enablement flag.
fn probe_fullscreen(_params: &ProbeParams, platform: &mut dyn Platform) -> ProbeOutcome {
    if platform.fullscreen_enabled() {
        ProbeOutcome::passed("Fullscreen mode is supported.")
    } else {
        ProbeOutcome::warning("Fullscreen mode is not supported in your browser.")
    }
}

/// Notification permission, requesting it when the user was never asked.
///
/// A failed request is caught here and downgraded to a warning. This probe
/// must not propagate errors past its own boundary.
fn probe_notifications(_params: &ProbeParams, platform: &mut dyn Platform) -> ProbeOutcome {
    match platform.notification_permission() {
        NotificationPermission::Granted => {
            ProbeOutcome::passed("Notification permission granted.")
        }
        NotificationPermission::Denied => {
            ProbeOutcome::warning("Notification permission not granted.")
        }
        NotificationPermission::Unprompted => match platform.request_notification_permission() {
            Ok(NotificationPermission::Granted) => {
                ProbeOutcome::passed("Notification permission granted.")
            }
            Ok(_) => ProbeOutcome::warning("Notification permission not granted."),
            Err(err) => {
                debug!("Notification permission request failed: {}", err);
                ProbeOutcome::warning("Could not request notification permission.")
            }
        },
        NotificationPermission::Unsupported => {
            ProbeOutcome::warning("Notifications not supported in your browser.")
        }
    }
}

/// Wall-clock time for a fixed counting loop against the budget.
fn probe_performance(params: &ProbeParams, _platform: &mut dyn Platform) -> ProbeOutcome {
    let start = Instant::now();
    let mut counter: u64 = 0;
    for _ in 0..params.benchmark_iterations {
        // black_box keeps the counting loop from being optimized away
        counter = black_box(counter + 1);
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "Benchmark counted to {} in {:.2}ms",
        counter, elapsed_ms
    );

    if elapsed_ms < params.benchmark_budget_ms {
        ProbeOutcome::passed(format!(
            "Performance check passed. Completed in {:.2}ms.",
            elapsed_ms
        ))
    } else {
        ProbeOutcome::warning(format!(
            "Performance may be slower than optimal. Completed in {:.2}ms.",
            elapsed_ms
        ))
    }
}
