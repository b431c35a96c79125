// ABOUTME: In-memory directory of workspaces with role-based visibility
// ABOUTME: Creates workspaces and projects and accepts workspace snapshots back from boards

use chrono::Utc;
use std::collections::HashSet;
use taskboard_core::{generate_unique_id, is_blank, User, DEFAULT_STATUSES};
use taskboard_tags::TagVocabulary;
use tracing::{debug, info};

use crate::error::{DirectoryError, DirectoryResult};
use crate::types::{Project, ProjectCreateInput, Workspace, WorkspaceCreateInput};

#[derive(Debug, Clone, Default)]
pub struct WorkspaceDirectory {
    workspaces: Vec<Workspace>,
    /// Ids handed out to registered users whose workspace does not exist yet
    reserved_ids: HashSet<String>,
}

impl WorkspaceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspaces(workspaces: Vec<Workspace>) -> Self {
        Self {
            workspaces,
            reserved_ids: HashSet::new(),
        }
    }

    pub fn all(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn get(&self, workspace_id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == workspace_id)
    }

    pub fn contains(&self, workspace_id: &str) -> bool {
        self.get(workspace_id).is_some()
    }

    /// Admins see every workspace; anyone else sees at most the one they are bound to
    pub fn list_visible(&self, user: &User) -> Vec<&Workspace> {
        if user.is_admin() {
            return self.workspaces.iter().collect();
        }
        match user.workspace_id.as_deref() {
            Some(id) => self.workspaces.iter().filter(|ws| ws.id == id).collect(),
            None => Vec::new(),
        }
    }

    /// Hand out a fresh workspace id that no workspace or earlier reservation uses
    pub fn reserve_id(&mut self) -> String {
        let id = generate_unique_id(|candidate| {
            self.contains(candidate) || self.reserved_ids.contains(candidate)
        });
        debug!("Reserved workspace id {}", id);
        self.reserved_ids.insert(id.clone());
        id
    }

    /// Give back a reservation that was never used
    pub fn release_id(&mut self, workspace_id: &str) -> bool {
        self.reserved_ids.remove(workspace_id)
    }

    pub fn is_reserved(&self, workspace_id: &str) -> bool {
        self.reserved_ids.contains(workspace_id)
    }

    /// Create a workspace owned by `owner`.
    ///
    /// `id_override` binds the workspace to an id reserved earlier for a
    /// self-registered user; otherwise a fresh id is generated.
    pub fn create_workspace(
        &mut self,
        input: WorkspaceCreateInput,
        owner: &str,
        id_override: Option<String>,
    ) -> DirectoryResult<Workspace> {
        if is_blank(&input.name) {
            debug!("Ignoring workspace creation with empty name");
            return Err(DirectoryError::MissingFields("name"));
        }

        let id = match id_override {
            Some(id) if self.contains(&id) => return Err(DirectoryError::DuplicateId(id)),
            Some(id) => {
                self.reserved_ids.remove(&id);
                id
            }
            None => generate_unique_id(|candidate| {
                self.contains(candidate) || self.reserved_ids.contains(candidate)
            }),
        };

        let workspace = Workspace {
            id,
            name: input.name,
            description: input.description,
            members: vec![owner.to_string()],
            tags: TagVocabulary::new(),
            statuses: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
            projects: Vec::new(),
            created_at: Utc::now(),
        };

        info!(
            "Created workspace '{}' with ID {} for {}",
            workspace.name, workspace.id, owner
        );
        self.workspaces.push(workspace.clone());
        Ok(workspace)
    }

    pub fn add_project(
        &mut self,
        workspace_id: &str,
        input: ProjectCreateInput,
    ) -> DirectoryResult<Project> {
        if is_blank(&input.name) {
            debug!("Ignoring project creation with empty name");
            return Err(DirectoryError::MissingFields("name"));
        }

        let index = self
            .workspaces
            .iter()
            .position(|ws| ws.id == workspace_id)
            .ok_or_else(|| DirectoryError::WorkspaceNotFound(workspace_id.to_string()))?;

        // Boards are stored by project id alone, so ids are unique across workspaces
        let id = generate_unique_id(|candidate| self.contains_project(candidate));
        let workspace = &mut self.workspaces[index];
        let project = Project {
            id,
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        };

        info!(
            "Added project '{}' ({}) to workspace {}",
            project.name, project.id, workspace.id
        );
        workspace.projects.push(project.clone());
        Ok(project)
    }

    /// Whether any workspace has a project with this id
    pub fn contains_project(&self, project_id: &str) -> bool {
        self.workspaces
            .iter()
            .any(|ws| ws.project(project_id).is_some())
    }

    /// Replace the stored workspace that has the same id
    pub fn update_workspace(&mut self, workspace: Workspace) -> DirectoryResult<()> {
        let slot = self
            .workspaces
            .iter_mut()
            .find(|ws| ws.id == workspace.id)
            .ok_or_else(|| DirectoryError::WorkspaceNotFound(workspace.id.clone()))?;
        debug!("Updated workspace {}", workspace.id);
        *slot = workspace;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids_are_not_reused() {
        let mut directory = WorkspaceDirectory::new();
        let first = directory.reserve_id();
        let second = directory.reserve_id();

        assert_ne!(first, second);
        assert!(directory.is_reserved(&first));
        assert!(!directory.contains(&first));
    }

    #[test]
    fn test_override_consumes_reservation() {
        let mut directory = WorkspaceDirectory::new();
        let id = directory.reserve_id();

        let workspace = directory
            .create_workspace(
                WorkspaceCreateInput {
                    name: "Mine".into(),
                    description: String::new(),
                },
                "alice",
                Some(id.clone()),
            )
            .unwrap();

        assert_eq!(workspace.id, id);
        assert!(!directory.is_reserved(&id));
    }
}
