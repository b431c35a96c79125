// ABOUTME: User-visible notifications produced by successful or rejected actions
// ABOUTME: A title/description pair tagged with its kind, delivered through a pluggable sink

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskCreated,
    TaskMoved,
    TaskUpdated,
    WorkspaceCreated,
    ProjectCreated,
    AuthSucceeded,
    AuthFailed,
}

impl NotificationKind {
    /// Failures are rendered differently by the presentation layer
    pub fn is_error(&self) -> bool {
        matches!(self, NotificationKind::AuthFailed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receiver of one-shot notifications
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Sink that keeps every notification in order, used by tests and the demo
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }

    /// Take all pending notifications, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

/// Sink that only writes notifications to the log
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        if notification.kind.is_error() {
            tracing::warn!("{}: {}", notification.title, notification.description);
        } else {
            tracing::info!("{}: {}", notification.title, notification.description);
        }
    }
}
