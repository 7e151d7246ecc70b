//! Host platform backed by the real process environment.
//!
//! The proctoring wrapper that launches the check exports a `GREENROOM_*`
//! environment contract describing the hosting browser. When those variables
//! are absent the implementation falls back to terminal facts, so the binary
//! stays usable standalone: the client string comes from `TERM_PROGRAM`/`TERM`
//! and the viewport from the terminal grid.

use std::sync::LazyLock;

use console::Term;
use dialoguer::Confirm;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::GreenroomError;

use super::{NotificationPermission, Platform};

/// Environment contract exported by the hosting wrapper.
pub const ENV_USER_AGENT: &str = "GREENROOM_USER_AGENT";
pub const ENV_VIEWPORT: &str = "GREENROOM_VIEWPORT";
pub const ENV_FULLSCREEN: &str = "GREENROOM_FULLSCREEN";
pub const ENV_NOTIFICATIONS: &str = "GREENROOM_NOTIFICATIONS";

/// Nominal glyph cell size in pixels for the terminal-grid viewport fallback.
const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

/// Terminal grid assumed when the size query reports zero (not a tty).
const FALLBACK_CELLS: (u16, u16) = (24, 80);

/// Regex for pulling an engine name and version out of a client string.
static ENGINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(chrome|firefox|safari)[/ ]([0-9][0-9.]*)")
        .expect("ENGINE_REGEX must compile")
});

/// Platform implementation that reads the real environment.
#[derive(Debug, Clone)]
pub struct HostPlatform {
    interactive: bool,
}

impl HostPlatform {
    /// Create a host platform.
    ///
    /// `interactive` controls whether the notification permission request
    /// may open a terminal prompt.
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Platform for HostPlatform {
    fn user_agent(&self) -> String {
        resolve_user_agent(&|key| std::env::var(key))
    }

    fn viewport(&self) -> (u32, u32) {
        resolve_viewport(&|key| std::env::var(key), terminal_cells())
    }

    fn fullscreen_enabled(&self) -> bool {
        resolve_fullscreen(&|key| std::env::var(key))
    }

    fn notification_permission(&self) -> NotificationPermission {
        resolve_notification_permission(&|key| std::env::var(key), self.interactive)
    }

    fn request_notification_permission(
        &mut self,
    ) -> crate::error::Result<NotificationPermission> {
        if !self.interactive {
            return Err(GreenroomError::PermissionRequestFailed {
                message: "no interactive terminal to ask for permission".to_string(),
            });
        }

        let granted = Confirm::new()
            .with_prompt("Allow competition notifications?")
            .default(true)
            .interact_on(&Term::stderr())
            .map_err(|e| GreenroomError::PermissionRequestFailed {
                message: e.to_string(),
            })?;

        Ok(if granted {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        })
    }
}

/// Resolve the client identification string.
///
/// The env contract wins; otherwise the terminal program name and `TERM`
/// give a stable identity for standalone runs.
pub fn resolve_user_agent<F>(env_fn: &F) -> String
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(agent) = env_fn(ENV_USER_AGENT) {
        if !agent.trim().is_empty() {
            if let Some((engine, version)) = extract_engine_version(&agent) {
                debug!("Client engine identified: {} {}", engine, version);
            }
            return agent;
        }
    }

    let program = env_fn("TERM_PROGRAM").ok().filter(|v| !v.is_empty());
    let term = env_fn("TERM").ok().filter(|v| !v.is_empty());
    match (program, term) {
        (Some(program), Some(term)) => format!("{} ({})", program, term),
        (Some(program), None) => program,
        (None, Some(term)) => term,
        (None, None) => "unknown".to_string(),
    }
}

/// Pull the first recognized engine name and its version out of a client
/// string, for diagnostics.
pub fn extract_engine_version(user_agent: &str) -> Option<(String, String)> {
    let caps = ENGINE_REGEX.captures(user_agent)?;
    Some((caps[1].to_lowercase(), caps[2].to_string()))
}

/// Resolve viewport dimensions in pixels.
///
/// `GREENROOM_VIEWPORT` holds `WIDTHxHEIGHT`. Without it, the terminal grid
/// is scaled by a nominal glyph cell so a maximized terminal still clears
/// the recommended 768x600.
pub fn resolve_viewport<F>(env_fn: &F, cells: (u16, u16)) -> (u32, u32)
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(raw) = env_fn(ENV_VIEWPORT) {
        match parse_viewport(&raw) {
            Some(dims) => return dims,
            None => {
                warn!("Ignoring malformed {}: {}", ENV_VIEWPORT, raw);
            }
        }
    }

    let (rows, cols) = if cells.0 == 0 || cells.1 == 0 {
        FALLBACK_CELLS
    } else {
        cells
    };
    (u32::from(cols) * CELL_WIDTH_PX, u32::from(rows) * CELL_HEIGHT_PX)
}

/// Parse a `WIDTHxHEIGHT` dimension string.
pub fn parse_viewport(raw: &str) -> Option<(u32, u32)> {
    let (width, height) = raw.trim().split_once(['x', 'X'])?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// Resolve the fullscreen-enabled flag.
///
/// Terminals carry no fullscreen facility of their own, so only the env
/// contract can turn this on.
pub fn resolve_fullscreen<F>(env_fn: &F) -> bool
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    match env_fn(ENV_FULLSCREEN) {
        Ok(raw) => match parse_flag(&raw) {
            Some(flag) => flag,
            None => {
                warn!("Ignoring malformed {}: {}", ENV_FULLSCREEN, raw);
                false
            }
        },
        Err(_) => false,
    }
}

/// Parse a boolean-ish env flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve the current notification permission.
///
/// Without an env override, an interactive terminal can still be asked
/// (`Unprompted`); a non-interactive one has no facility at all.
pub fn resolve_notification_permission<F>(env_fn: &F, interactive: bool) -> NotificationPermission
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(raw) = env_fn(ENV_NOTIFICATIONS) {
        match NotificationPermission::from_keyword(&raw) {
            Some(permission) => return permission,
            None => {
                warn!("Ignoring malformed {}: {}", ENV_NOTIFICATIONS, raw);
            }
        }
    }

    if interactive {
        NotificationPermission::Unprompted
    } else {
        NotificationPermission::Unsupported
    }
}

/// Current terminal grid as (rows, cols).
fn terminal_cells() -> (u16, u16) {
    Term::stdout().size()
}
