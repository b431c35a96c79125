// ABOUTME: Workspace and project type definitions
// ABOUTME: A workspace exclusively owns its projects and defines the columns of their boards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_tags::TagVocabulary;
use taskboard_tasks::{Task, TaskBoard};

use crate::error::{DirectoryError, DirectoryResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: Vec<String>,
    pub tags: TagVocabulary,
    /// Kanban columns, in display order. Every task status is one of these.
    pub statuses: Vec<String>,
    pub projects: Vec<Project>,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Open the board of one of this workspace's projects over the given tasks
    pub fn open_board(&self, project_id: &str, tasks: Vec<Task>) -> DirectoryResult<TaskBoard> {
        if self.project(project_id).is_none() {
            return Err(DirectoryError::ProjectNotFound(project_id.to_string()));
        }
        Ok(TaskBoard::new(
            project_id,
            self.statuses.clone(),
            self.tags.clone(),
            tasks,
        ))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceCreateInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCreateInput {
    pub name: String,
    pub description: String,
}
