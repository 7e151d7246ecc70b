//! Mock platform implementation for testing.
//!
//! `MockPlatform` implements the `Platform` trait and answers every query
//! from a script. Scenario tests start from [`MockPlatform::ready`] (a host
//! where every probe passes) and degrade individual facilities from there.
//!
//! # Example
//!
//! ```
//! use greenroom::platform::{MockPlatform, Platform};
//!
//! let platform = MockPlatform::ready().with_viewport(500, 400);
//! assert_eq!(platform.viewport(), (500, 400));
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{GreenroomError, Result};

use super::{NotificationPermission, Platform};

/// What a scripted permission request resolves to.
#[derive(Debug, Clone)]
pub enum RequestOutcome {
    /// The user grants the permission.
    Grant,

    /// The user declines the permission.
    Deny,

    /// The request itself errors out before the user can answer.
    Fail(String),
}

/// Platform implementation for testing.
///
/// Captures permission requests and allows scripted answers for every
/// facility a probe inspects. Clones share the request counter, so a probe
/// running on a sequencer helper thread still records against the original.
#[derive(Debug, Clone)]
pub struct MockPlatform {
    user_agent: String,
    viewport: (u32, u32),
    fullscreen: bool,
    permission: NotificationPermission,
    request_outcome: RequestOutcome,
    permission_requests: Arc<Mutex<usize>>,
}

impl MockPlatform {
    /// A host where every probe passes: recognized client, roomy viewport,
    /// fullscreen available, notifications already granted.
    pub fn ready() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            viewport: (1920, 1080),
            fullscreen: true,
            permission: NotificationPermission::Granted,
            request_outcome: RequestOutcome::Grant,
            permission_requests: Arc::new(Mutex::new(0)),
        }
    }

    /// Override the client identification string.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Override the viewport dimensions.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    /// Override the fullscreen flag.
    pub fn with_fullscreen(mut self, enabled: bool) -> Self {
        self.fullscreen = enabled;
        self
    }

    /// Override the current notification permission.
    pub fn with_permission(mut self, permission: NotificationPermission) -> Self {
        self.permission = permission;
        self
    }

    /// Script what a permission request resolves to.
    pub fn with_request_outcome(mut self, outcome: RequestOutcome) -> Self {
        self.request_outcome = outcome;
        self
    }

    /// How many times a probe asked for the notification permission,
    /// counted across every clone of this platform.
    pub fn permission_requests(&self) -> usize {
        *self.permission_requests.lock().unwrap()
    }
}

impl Platform for MockPlatform {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn fullscreen_enabled(&self) -> bool {
        self.fullscreen
    }

    fn notification_permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_notification_permission(&mut self) -> Result<NotificationPermission> {
        *self.permission_requests.lock().unwrap() += 1;
        match &self.request_outcome {
            RequestOutcome::Grant => Ok(NotificationPermission::Granted),
            RequestOutcome::Deny => Ok(NotificationPermission::Denied),
            RequestOutcome::Fail(message) => Err(GreenroomError::PermissionRequestFailed {
                message: message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_platform_is_fully_capable() {
        let platform = MockPlatform::ready();
        assert!(platform.user_agent().to_lowercase().contains("chrome"));
        assert_eq!(platform.viewport(), (1920, 1080));
        assert!(platform.fullscreen_enabled());
        assert_eq!(
            platform.notification_permission(),
            NotificationPermission::Granted
        );
    }

    #[test]
    fn overrides_apply() {
        let platform = MockPlatform::ready()
            .with_user_agent("Lynx/2.9.0dev.10")
            .with_viewport(500, 400)
            .with_fullscreen(false)
            .with_permission(NotificationPermission::Denied);

        assert_eq!(platform.user_agent(), "Lynx/2.9.0dev.10");
        assert_eq!(platform.viewport(), (500, 400));
        assert!(!platform.fullscreen_enabled());
        assert_eq!(
            platform.notification_permission(),
            NotificationPermission::Denied
        );
    }

    #[test]
    fn request_counts_and_grants() {
        let mut platform = MockPlatform::ready();
        let result = platform.request_notification_permission().unwrap();
        assert_eq!(result, NotificationPermission::Granted);
        assert_eq!(platform.permission_requests(), 1);
    }

    #[test]
    fn scripted_denial() {
        let mut platform = MockPlatform::ready().with_request_outcome(RequestOutcome::Deny);
        let result = platform.request_notification_permission().unwrap();
        assert_eq!(result, NotificationPermission::Denied);
    }

    #[test]
    fn scripted_failure() {
        let mut platform =
            MockPlatform::ready().with_request_outcome(RequestOutcome::Fail("dismissed".into()));
        let result = platform.request_notification_permission();
        assert!(matches!(
            result,
            Err(GreenroomError::PermissionRequestFailed { .. })
        ));
        assert_eq!(platform.permission_requests(), 1);
    }

    #[test]
    fn clones_share_the_request_counter() {
        let platform = MockPlatform::ready();
        let mut clone = platform.clone();
        clone.request_notification_permission().unwrap();
        assert_eq!(platform.permission_requests(), 1);
    }
}
