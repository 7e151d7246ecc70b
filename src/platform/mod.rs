//! Platform service facade.
//!
//! Capability probes never touch the hosting environment directly. They go
//! through the [`Platform`] trait: client identification string, viewport
//! dimensions, fullscreen flag, notification permission. [`HostPlatform`]
//! answers from the real process environment; [`MockPlatform`] answers from
//! a script, which is how the probe and sequencer tests run.
//!
//! # Example
//!
//! ```
//! use greenroom::platform::{MockPlatform, Platform};
//!
//! let platform = MockPlatform::ready();
//! assert_eq!(platform.viewport(), (1920, 1080));
//! ```

pub mod host;
pub mod mock;

pub use host::HostPlatform;
pub use mock::{MockPlatform, RequestOutcome};

use crate::error::Result;

/// State of the notification permission as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    /// Granted earlier; no prompt needed.
    Granted,

    /// Denied earlier; asking again is pointless.
    Denied,

    /// The user has not been asked yet.
    Unprompted,

    /// The host has no notification facility at all.
    Unsupported,
}

impl NotificationPermission {
    /// Parse a permission keyword as reported by hosting wrappers.
    ///
    /// Accepts the browser vocabulary (`default` means not yet asked).
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "granted" => Some(NotificationPermission::Granted),
            "denied" => Some(NotificationPermission::Denied),
            "default" | "unprompted" => Some(NotificationPermission::Unprompted),
            "unsupported" => Some(NotificationPermission::Unsupported),
            _ => None,
        }
    }

    /// Whether notifications may be posted right now.
    pub fn is_granted(&self) -> bool {
        matches!(self, NotificationPermission::Granted)
    }
}

/// Trait for querying the hosting environment.
///
/// This trait allows mocking the host in tests.
pub trait Platform {
    /// Client identification string (a browser user agent, or the terminal
    /// program name when running standalone).
    fn user_agent(&self) -> String;

    /// Viewport dimensions in pixels as (width, height).
    fn viewport(&self) -> (u32, u32);

    /// Whether the host can enter fullscreen mode.
    fn fullscreen_enabled(&self) -> bool;

    /// Current notification permission, without prompting.
    fn notification_permission(&self) -> NotificationPermission;

    /// Ask the user for notification permission.
    ///
    /// Called only when the current permission is
    /// [`NotificationPermission::Unprompted`].
    fn request_notification_permission(&mut self) -> Result<NotificationPermission>;
}
