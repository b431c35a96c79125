// ABOUTME: Kanban board view over one project's tasks
// ABOUTME: Creation, drag-and-drop moves, field edits, tag operations and column grouping

use chrono::Utc;
use taskboard_core::{generate_unique_id, is_blank};
use taskboard_tags::{normalize_tag, TagVocabulary};
use tracing::{debug, info};

use crate::error::{BoardError, BoardResult};
use crate::types::{Task, TaskCreateInput, TaskField, TaskFilter};

/// Tasks of one status column after filtering
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub status: &'a str,
    pub tasks: Vec<&'a Task>,
}

impl Column<'_> {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Result of adding a tag through free-text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOutcome {
    /// The tag was new to the board vocabulary
    pub vocabulary_grew: bool,
    /// The tag was attached to the task
    pub task_changed: bool,
}

/// Board for a single project.
///
/// Owns the project's tasks and a working copy of the workspace tag
/// vocabulary while it is open. Call [`TaskBoard::into_parts`] when leaving
/// the board to hand both back to their owners.
#[derive(Debug, Clone)]
pub struct TaskBoard {
    project_id: String,
    statuses: Vec<String>,
    vocabulary: TagVocabulary,
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(
        project_id: impl Into<String>,
        statuses: Vec<String>,
        vocabulary: TagVocabulary,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            statuses,
            vocabulary,
            tasks,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Close the board, returning its tasks and vocabulary
    pub fn into_parts(self) -> (Vec<Task>, TagVocabulary) {
        (self.tasks, self.vocabulary)
    }

    pub fn create_task(&mut self, input: TaskCreateInput) -> BoardResult<Task> {
        if is_blank(&input.title) {
            debug!("Ignoring task creation with empty title");
            return Err(BoardError::MissingFields("title"));
        }

        let status = match input.status {
            Some(status) => self.ensure_status(status)?,
            None => self
                .statuses
                .first()
                .cloned()
                .ok_or_else(|| BoardError::UnknownStatus(String::new()))?,
        };

        let id = generate_unique_id(|candidate| self.task(candidate).is_some());
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status,
            priority: input.priority,
            tags: Vec::new(),
            assignee: input.assignee,
            is_active: true,
            created_at: Utc::now(),
        };

        info!(
            "Created task '{}' ({}) in column '{}' of project {}",
            task.title, task.id, task.status, self.project_id
        );
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Drop a task onto a column. Moving onto its current column changes nothing.
    pub fn move_task(&mut self, task_id: &str, status: &str) -> BoardResult<&Task> {
        let status = self.ensure_status(status.to_string())?;
        debug!("Moving task {} to '{}'", task_id, status);
        self.update_task(task_id, |task| task.status = status)
    }

    pub fn set_active(&mut self, task_id: &str, is_active: bool) -> BoardResult<&Task> {
        self.update_task(task_id, |task| task.is_active = is_active)
    }

    pub fn edit_field(&mut self, task_id: &str, field: TaskField) -> BoardResult<&Task> {
        match field {
            TaskField::Description(description) => {
                self.update_task(task_id, |task| task.description = description)
            }
            TaskField::Status(status) => self.move_task(task_id, &status),
            TaskField::Priority(priority) => {
                self.update_task(task_id, |task| task.priority = priority)
            }
            TaskField::Assignee(assignee) => {
                self.update_task(task_id, |task| task.assignee = assignee)
            }
        }
    }

    /// Attach a free-text tag, growing the vocabulary when the tag is new
    pub fn add_tag(&mut self, task_id: &str, input: &str) -> BoardResult<TagOutcome> {
        let tag = normalize_tag(input).ok_or(BoardError::MissingFields("tag"))?;
        let already_tagged = self.find(task_id)?.has_tag(&tag);

        let vocabulary_grew = self.vocabulary.insert(tag.clone());
        if !already_tagged {
            self.update_task(task_id, |task| task.tags.push(tag))?;
        }

        Ok(TagOutcome {
            vocabulary_grew,
            task_changed: !already_tagged,
        })
    }

    /// Detach a tag from the task only; the vocabulary keeps it.
    /// Returns whether the task carried the tag.
    pub fn remove_tag(&mut self, task_id: &str, tag: &str) -> BoardResult<bool> {
        if !self.find(task_id)?.has_tag(tag) {
            return Ok(false);
        }
        self.update_task(task_id, |task| task.tags.retain(|t| t != tag))?;
        Ok(true)
    }

    /// Flip a vocabulary tag on the task. Returns whether the task now carries it.
    pub fn toggle_tag(&mut self, task_id: &str, tag: &str) -> BoardResult<bool> {
        if self.find(task_id)?.has_tag(tag) {
            self.update_task(task_id, |task| task.tags.retain(|t| t != tag))?;
            return Ok(false);
        }
        if !self.vocabulary.contains(tag) {
            return Err(BoardError::UnknownTag(tag.to_string()));
        }
        let tag = tag.to_string();
        self.update_task(task_id, |task| task.tags.push(tag))?;
        Ok(true)
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        filter.apply(&self.tasks)
    }

    /// Group the filtered tasks by column, in workspace status order
    pub fn columns(&self, filter: TaskFilter) -> Vec<Column<'_>> {
        let visible = self.filtered(filter);
        self.statuses
            .iter()
            .map(|status| Column {
                status,
                tasks: visible
                    .iter()
                    .copied()
                    .filter(|task| task.status == *status)
                    .collect(),
            })
            .collect()
    }

    pub fn column_count(&self, status: &str, filter: TaskFilter) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == status && filter.matches(task))
            .count()
    }

    fn ensure_status(&self, status: String) -> BoardResult<String> {
        if self.statuses.contains(&status) {
            Ok(status)
        } else {
            Err(BoardError::UnknownStatus(status))
        }
    }

    fn find(&self, task_id: &str) -> BoardResult<&Task> {
        self.task(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))
    }

    /// Replace a task record with an edited copy
    fn update_task(
        &mut self,
        task_id: &str,
        edit: impl FnOnce(&mut Task),
    ) -> BoardResult<&Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;

        let mut updated = self.tasks[index].clone();
        edit(&mut updated);
        self.tasks[index] = updated;
        Ok(&self.tasks[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskPriority;

    fn board() -> TaskBoard {
        TaskBoard::new(
            "p1",
            vec!["Бэклог".into(), "В работе".into(), "Готово".into()],
            ["urgent"].into_iter().collect(),
            Vec::new(),
        )
    }

    fn create(board: &mut TaskBoard, title: &str) -> Task {
        board
            .create_task(TaskCreateInput {
                title: title.to_string(),
                ..Default::default()
            })
            .unwrap()
    }

    #[test]
    fn test_create_task_defaults() {
        let mut board = board();
        let task = create(&mut board, "Fix bug");

        assert_eq!(task.status, "Бэклог");
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.is_active);
        assert!(task.tags.is_empty());
        assert_eq!(board.tasks().len(), 1);
    }

    #[test]
    fn test_create_task_rejects_unknown_status() {
        let mut board = board();
        let result = board.create_task(TaskCreateInput {
            title: "x".into(),
            status: Some("Archive".into()),
            ..Default::default()
        });

        assert_eq!(result, Err(BoardError::UnknownStatus("Archive".into())));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_create_task_without_columns_fails() {
        let mut board = TaskBoard::new("p1", Vec::new(), TagVocabulary::new(), Vec::new());
        assert!(board
            .create_task(TaskCreateInput {
                title: "x".into(),
                ..Default::default()
            })
            .is_err());
    }

    #[test]
    fn test_update_unknown_task() {
        let mut board = board();
        assert_eq!(
            board.set_active("missing", false).map(|t| t.id.clone()),
            Err(BoardError::TaskNotFound("missing".into()))
        );
    }

    #[test]
    fn test_remove_absent_tag_reports_no_change() {
        let mut board = board();
        let task = create(&mut board, "a");
        assert_eq!(board.remove_tag(&task.id, "urgent"), Ok(false));
    }
}
