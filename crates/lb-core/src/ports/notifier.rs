use crate::notification::Notification;

/// Shows transient global notifications.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
