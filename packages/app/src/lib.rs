// ABOUTME: Application state holder for the Taskboard kanban
// ABOUTME: Turns user events into changes of session, directory and boards, emitting notifications

pub mod app;
pub mod error;
pub mod events;
pub mod messages;
pub mod seed;

pub use app::App;
pub use error::{AppError, AppResult};
pub use events::Event;
