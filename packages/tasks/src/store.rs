// ABOUTME: Project-keyed task storage held in memory for the session
// ABOUTME: Boards check their task list out on open and save it back on close

use std::collections::HashMap;
use tracing::debug;

use crate::types::Task;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    boards: HashMap<String, Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks of a project in insertion order; empty for unknown projects
    pub fn tasks(&self, project_id: &str) -> &[Task] {
        self.boards
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Remove and return a project's tasks so a board can own them
    pub fn checkout(&mut self, project_id: &str) -> Vec<Task> {
        let tasks = self.boards.remove(project_id).unwrap_or_default();
        debug!("Checked out {} tasks of project {}", tasks.len(), project_id);
        tasks
    }

    /// Store a project's tasks, replacing whatever was saved before
    pub fn save(&mut self, project_id: impl Into<String>, tasks: Vec<Task>) {
        let project_id = project_id.into();
        debug!("Saving {} tasks of project {}", tasks.len(), project_id);
        self.boards.insert(project_id, tasks);
    }

    pub fn project_count(&self) -> usize {
        self.boards.len()
    }
}
