//! Routes coordinator and order-book notifications into the log.

use tracing::{info, warn};

use galley_core::{Notification, NotificationKind, Notifier};

/// Logs every notification. Warnings and errors go out at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            kind,
            title,
            message,
        } = notification;

        match kind {
            NotificationKind::Warning | NotificationKind::Error => {
                warn!(%title, ?kind, "{}", message)
            }
            NotificationKind::Info | NotificationKind::Success => {
                info!(%title, ?kind, "{}", message)
            }
        }
    }
}
