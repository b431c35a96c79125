use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Required field is empty: {0}")]
    MissingFields(&'static str),
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(String),
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[error("Workspace with id '{0}' already exists")]
    DuplicateId(String),
}
