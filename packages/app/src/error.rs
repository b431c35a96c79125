// ABOUTME: Errors surfaced by application event handling
// ABOUTME: Wraps the domain errors and adds selection and session guards

use taskboard_auth::AuthError;
use taskboard_tasks::BoardError;
use taskboard_workspaces::DirectoryError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not logged in")]
    NotAuthenticated,
    #[error("No {0} selected")]
    NoSelection(&'static str),
    #[error("Regular users may own a single workspace")]
    WorkspaceLimitReached,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl AppError {
    /// Guards that leave state untouched without telling the user anything
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            AppError::NoSelection(_)
                | AppError::Board(BoardError::MissingFields(_))
                | AppError::Directory(DirectoryError::MissingFields(_))
        )
    }
}
