//! Session-end notification.
//!
//! The timer itself has no notification dependency; whoever drives it injects
//! a [`SessionNotifier`]. Delivery is best effort: the call returns nothing
//! and failures are swallowed, so a broken notification daemon can never stall
//! the countdown.

use notify_rust::Notification;

use crate::timer::SessionKind;

/// A sink told about session expirations, exactly once per expiry.
pub trait SessionNotifier {
    /// Called when a session finishes. Fire and forget.
    fn session_ended(&self, finished: SessionKind);
}

/// Desktop notifications via the platform notification service.
pub struct DesktopNotifier;

impl SessionNotifier for DesktopNotifier {
    fn session_ended(&self, finished: SessionKind) {
        let (summary, body) = match finished {
            SessionKind::Work => ("Focus session complete", "Time for a break."),
            SessionKind::Break => ("Break over", "Ready for the next focus session?"),
        };

        // Detached so a slow notification daemon can never delay a tick.
        std::thread::spawn(move || {
            Notification::new()
                .appname("tomadoro")
                .summary(summary)
                .body(body)
                .show()
                .ok();
        });
    }
}

/// Discards every notification. Used when notifications are disabled.
pub struct SilentNotifier;

impl SessionNotifier for SilentNotifier {
    fn session_ended(&self, _finished: SessionKind) {}
}
