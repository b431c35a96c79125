// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Taskboard

// Logging
pub const TASKBOARD_LOG: &str = "TASKBOARD_LOG";
pub const RUST_LOG: &str = "RUST_LOG";

// Authentication
pub const TASKBOARD_AUTH_MODE: &str = "TASKBOARD_AUTH_MODE";

// Demo data
pub const TASKBOARD_SEED_DEMO: &str = "TASKBOARD_SEED_DEMO";

// Defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_AUTH_MODE: &str = "registered";
pub const DEFAULT_SEED_DEMO: &str = "true";
