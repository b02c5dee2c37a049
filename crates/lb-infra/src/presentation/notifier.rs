use tracing::{error, info};

use lb_core::ports::NotifierPort;
use lb_core::{Notification, NotificationLevel};

/// Writes notifications to the log instead of showing toasts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotifierPort for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                error!(target: "linkbio::notify", message = %notification.message)
            }
            level => info!(target: "linkbio::notify", ?level, message = %notification.message),
        }
    }
}
