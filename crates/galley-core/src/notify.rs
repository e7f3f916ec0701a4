//! # Notifications
//!
//! The side channel through which the coordinator and order book tell the
//! user what happened ("Table 4 is now reserved", "Booking conflict").
//!
//! ```text
//! ┌──────────────────────┐   notify()   ┌──────────────────────────────┐
//! │ ReservationCoordinator│────────────►│ dyn Notifier                 │
//! │ PurchaseOrderBook     │             │  • NoOpNotifier (default)    │
//! └──────────────────────┘              │  • RecordingNotifier (tests) │
//!                                       │  • TracingNotifier (service) │
//!                                       └──────────────────────────────┘
//! ```
//!
//! Core code never logs directly; the service decides where notifications
//! go.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use ts_rs::TS;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing message (a toast, in the web UI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Drops every notification.
#[derive(Debug, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().expect("Notifier mutex poisoned").clone()
    }

    /// Most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().expect("Notifier mutex poisoned").last().cloned()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.seen.lock().expect("Notifier mutex poisoned").clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen
            .lock()
            .expect("Notifier mutex poisoned")
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::info("first", "a"));
        notifier.notify(Notification::error("second", "b"));

        let seen = notifier.notifications();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "first");
        assert_eq!(notifier.last().unwrap().kind, NotificationKind::Error);

        notifier.clear();
        assert!(notifier.last().is_none());
    }
}
