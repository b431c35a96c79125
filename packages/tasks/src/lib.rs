// ABOUTME: Kanban task board with drag-and-drop moves, tagging and filtering
// ABOUTME: Provides task types, the per-project board view and the project-keyed task store

pub mod board;
pub mod error;
pub mod store;
pub mod types;

pub use board::{Column, TagOutcome, TaskBoard};
pub use error::{BoardError, BoardResult};
pub use store::TaskStore;
pub use types::*;
