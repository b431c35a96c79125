// ABOUTME: Error types for task board operations
// ABOUTME: Validation outcomes; a failed operation never changes board state

use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Required field is empty: {0}")]
    MissingFields(&'static str),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Status '{0}' is not a column of this board")]
    UnknownStatus(String),

    #[error("Tag '{0}' is not in the tag vocabulary")]
    UnknownTag(String),
}
