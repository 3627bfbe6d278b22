//! User-visible notifications (toasts).
//!
//! Views never surface errors directly; they hand a [`Notification`] to a
//! [`Notifier`]. The default [`NotificationCenter`] fans notifications out over a
//! broadcast channel so any number of UI surfaces can display them.

use tokio::sync::broadcast;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    /// Rendered with the destructive style.
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Broadcast-backed [`Notifier`].
#[derive(Clone)]
pub struct NotificationCenter {
    sender: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        info!(kind = ?notification.kind, description = %notification.description, "Notify");
        // No subscribers is fine: nobody is looking at the screen.
        let _ = self.sender.send(notification);
    }
}
