// ABOUTME: Core types, traits, and utilities for Taskboard
// ABOUTME: Foundational package providing shared functionality across all Taskboard packages

pub mod constants;
pub mod notifications;
pub mod types;
pub mod utils;

// Re-export main types
pub use types::{Role, User};

// Re-export constants
pub use constants::{ADMIN_PASSWORD, ADMIN_USERNAME, DEFAULT_STATUSES};

// Re-export notifications
pub use notifications::{
    Notification, NotificationKind, NotificationLog, NotificationSink, TracingSink,
};

// Re-export utilities
pub use utils::{generate_id, generate_unique_id, is_blank};
