// ABOUTME: Workspace directory and project registry
// ABOUTME: Workspaces scope members, tag vocabulary, kanban columns and projects

pub mod directory;
pub mod error;
pub mod types;

pub use directory::WorkspaceDirectory;
pub use error::{DirectoryError, DirectoryResult};
pub use types::{Project, ProjectCreateInput, Workspace, WorkspaceCreateInput};
