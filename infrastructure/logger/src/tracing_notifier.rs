use business::domain::membership::notification::{Notification, Severity};
use business::domain::membership::services::Notifier;
use tracing::{info, warn};

const TARGET: &str = "matchup::notifications";

/// Emits user notifications as structured log events.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!(
                target: TARGET,
                title = %notification.title,
                severity = %notification.severity,
                "{}",
                notification.description
            ),
            Severity::Destructive => warn!(
                target: TARGET,
                title = %notification.title,
                severity = %notification.severity,
                "{}",
                notification.description
            ),
        }
    }
}
