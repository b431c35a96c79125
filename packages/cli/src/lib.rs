// ABOUTME: Library side of the taskboard binary
// ABOUTME: Configuration, logging setup, terminal rendering and the console notification sink

pub mod config;
pub mod render;

use taskboard_config::constants::{DEFAULT_LOG_FILTER, RUST_LOG, TASKBOARD_LOG};
use taskboard_core::{Notification, NotificationSink};
use tracing_subscriber::EnvFilter;

pub use config::{Config, ConfigError};

/// Install the global tracing subscriber.
///
/// `TASKBOARD_LOG` wins over `RUST_LOG`; with neither set the filter is `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(TASKBOARD_LOG)
        .or_else(|_| EnvFilter::try_from_env(RUST_LOG))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Prints every notification to stdout as it arrives
#[derive(Debug, Default)]
pub struct ConsoleSink {
    shown: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications printed so far
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, notification: Notification) {
        println!("{}", render::notification_line(&notification));
        self.shown += 1;
    }
}
