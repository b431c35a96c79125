// ABOUTME: The single in-memory holder of session, workspaces and task boards
// ABOUTME: Each event runs to completion and either replaces state or leaves it untouched

use taskboard_auth::{AuthMode, Session};
use taskboard_core::{NotificationLog, NotificationSink, User};
use taskboard_tasks::{Column, Task, TaskBoard, TaskCreateInput, TaskField, TaskFilter, TaskStore};
use taskboard_workspaces::{
    DirectoryError, Project, ProjectCreateInput, Workspace, WorkspaceCreateInput,
    WorkspaceDirectory,
};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::events::Event;
use crate::messages;
use crate::seed;

pub struct App<S: NotificationSink = NotificationLog> {
    session: Session,
    directory: WorkspaceDirectory,
    store: TaskStore,
    selected_workspace: Option<String>,
    board: Option<TaskBoard>,
    selected_task: Option<String>,
    dragged_task: Option<String>,
    filter: TaskFilter,
    sink: S,
}

impl App<NotificationLog> {
    pub fn new(mode: AuthMode) -> Self {
        Self::with_sink(mode, NotificationLog::new())
    }
}

impl<S: NotificationSink> App<S> {
    pub fn with_sink(mode: AuthMode, sink: S) -> Self {
        Self {
            session: Session::new(mode),
            directory: WorkspaceDirectory::new(),
            store: TaskStore::new(),
            selected_workspace: None,
            board: None,
            selected_task: None,
            dragged_task: None,
            filter: TaskFilter::All,
            sink,
        }
    }

    /// Load the demo workspace and the tasks of its first project
    pub fn with_demo_data(mut self) -> Self {
        self.directory = WorkspaceDirectory::with_workspaces(vec![seed::demo_workspace()]);
        self.store.save(seed::DEMO_PROJECT_ID, seed::demo_tasks());
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn directory(&self) -> &WorkspaceDirectory {
        &self.directory
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn visible_workspaces(&self) -> Vec<&Workspace> {
        match self.session.current_user() {
            Some(user) => self.directory.list_visible(user),
            None => Vec::new(),
        }
    }

    /// Whether the current user may create another workspace
    pub fn can_create_workspace(&self) -> bool {
        match self.session.current_user() {
            Some(user) => user.is_admin() || self.directory.list_visible(user).is_empty(),
            None => false,
        }
    }

    pub fn selected_workspace(&self) -> Option<&Workspace> {
        self.selected_workspace
            .as_deref()
            .and_then(|id| self.directory.get(id))
    }

    pub fn board(&self) -> Option<&TaskBoard> {
        self.board.as_ref()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.selected_task.as_deref()?;
        self.board.as_ref()?.task(id)
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Columns of the open board under the current filter
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.board
            .as_ref()
            .map(|board| board.columns(self.filter))
            .unwrap_or_default()
    }

    pub fn handle(&mut self, event: Event) -> AppResult<()> {
        debug!("Handling event {}", event.name());
        match event {
            Event::Login { username, password } => self.login(&username, &password),
            Event::Register { username, password } => self.register(&username, &password),
            Event::Logout => {
                self.logout();
                Ok(())
            }
            Event::CreateWorkspace(input) => self.create_workspace(input).map(|_| ()),
            Event::SelectWorkspace { workspace_id } => self.select_workspace(&workspace_id),
            Event::CloseWorkspace => self.close_workspace(),
            Event::CreateProject(input) => self.create_project(input).map(|_| ()),
            Event::OpenProject { project_id } => self.open_project(&project_id),
            Event::CloseProject => self.close_project(),
            Event::SetFilter { filter } => {
                self.filter = filter;
                Ok(())
            }
            Event::CreateTask(input) => self.create_task(input).map(|_| ()),
            Event::SelectTask { task_id } => self.select_task(&task_id),
            Event::DragStart { task_id } => self.drag_start(&task_id),
            Event::Drop { status } => self.drop_task(&status),
            Event::ToggleActive { is_active } => self.set_active(is_active),
            Event::EditField(field) => self.edit_field(field),
            Event::AddTag { text } => self.add_tag(&text),
            Event::RemoveTag { tag } => self.remove_tag(&tag),
            Event::ToggleTag { tag } => self.toggle_tag(&tag),
        }
    }

    /// Log in; a rejected attempt keeps the current user and selection
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<()> {
        match self.session.login(username, password) {
            Ok(user) => {
                self.leave_workspace()?;
                self.sink.notify(messages::auth_succeeded(&user));
                Ok(())
            }
            Err(e) => {
                self.sink.notify(messages::auth_failed(&e));
                Err(e.into())
            }
        }
    }

    /// Register a user bound to a freshly reserved workspace id, then log them in
    pub fn register(&mut self, username: &str, password: &str) -> AppResult<()> {
        let workspace_id = self.directory.reserve_id();
        match self.session.register(username, password, workspace_id.clone()) {
            Ok(user) => {
                self.leave_workspace()?;
                self.sink.notify(messages::auth_succeeded(&user));
                Ok(())
            }
            Err(e) => {
                self.directory.release_id(&workspace_id);
                self.sink.notify(messages::auth_failed(&e));
                Err(e.into())
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.leave_workspace() {
            debug!("Could not save open board on logout: {}", e);
        }
        self.filter = TaskFilter::All;
        self.session.logout();
    }

    pub fn create_workspace(&mut self, input: WorkspaceCreateInput) -> AppResult<Workspace> {
        let user = self
            .session
            .current_user()
            .cloned()
            .ok_or(AppError::NotAuthenticated)?;
        if !self.can_create_workspace() {
            return Err(AppError::WorkspaceLimitReached);
        }

        let id_override = if user.is_admin() {
            None
        } else {
            user.workspace_id.clone()
        };
        let workspace = self
            .directory
            .create_workspace(input, &user.username, id_override)?;

        if !user.is_admin() {
            self.session.bind_workspace(&workspace.id);
        }
        self.sink.notify(messages::workspace_created(&workspace));
        Ok(workspace)
    }

    pub fn select_workspace(&mut self, workspace_id: &str) -> AppResult<()> {
        if !self
            .visible_workspaces()
            .iter()
            .any(|ws| ws.id == workspace_id)
        {
            return Err(DirectoryError::WorkspaceNotFound(workspace_id.to_string()).into());
        }
        self.leave_workspace()?;
        self.selected_workspace = Some(workspace_id.to_string());
        Ok(())
    }

    pub fn close_workspace(&mut self) -> AppResult<()> {
        self.leave_workspace()
    }

    pub fn create_project(&mut self, input: ProjectCreateInput) -> AppResult<Project> {
        let workspace_id = self
            .selected_workspace
            .clone()
            .ok_or(AppError::NoSelection("workspace"))?;
        let project = self.directory.add_project(&workspace_id, input)?;
        self.sink.notify(messages::project_created(&project));
        Ok(project)
    }

    pub fn open_project(&mut self, project_id: &str) -> AppResult<()> {
        let workspace_id = self
            .selected_workspace
            .clone()
            .ok_or(AppError::NoSelection("workspace"))?;
        let workspace = self
            .directory
            .get(&workspace_id)
            .ok_or_else(|| DirectoryError::WorkspaceNotFound(workspace_id.clone()))?;
        if workspace.project(project_id).is_none() {
            return Err(DirectoryError::ProjectNotFound(project_id.to_string()).into());
        }

        // Closing the board may rewrite the workspace tags
        self.close_project()?;
        let workspace = self
            .directory
            .get(&workspace_id)
            .ok_or_else(|| DirectoryError::WorkspaceNotFound(workspace_id.clone()))?;
        let tasks = self.store.checkout(project_id);
        let board = workspace.open_board(project_id, tasks)?;
        debug!(
            "Opened board of project {} with {} tasks",
            project_id,
            board.tasks().len()
        );
        self.board = Some(board);
        Ok(())
    }

    /// Leave the open board, saving its tasks and tag vocabulary
    pub fn close_project(&mut self) -> AppResult<()> {
        self.selected_task = None;
        self.dragged_task = None;
        let Some(board) = self.board.take() else {
            return Ok(());
        };

        let project_id = board.project_id().to_string();
        let (tasks, vocabulary) = board.into_parts();
        self.store.save(project_id, tasks);

        if let Some(workspace_id) = self.selected_workspace.as_deref() {
            if let Some(workspace) = self.directory.get(workspace_id) {
                if workspace.tags != vocabulary {
                    let mut updated = workspace.clone();
                    updated.tags = vocabulary;
                    self.directory.update_workspace(updated)?;
                }
            }
        }
        Ok(())
    }

    pub fn create_task(&mut self, mut input: TaskCreateInput) -> AppResult<Task> {
        let username = self
            .session
            .current_user()
            .map(|u| u.username.clone())
            .ok_or(AppError::NotAuthenticated)?;
        let board = self.board.as_mut().ok_or(AppError::NoSelection("project"))?;

        if input.assignee.is_none() {
            input.assignee = Some(username);
        }
        let task = board.create_task(input)?;
        self.sink.notify(messages::task_created(&task));
        Ok(task)
    }

    pub fn select_task(&mut self, task_id: &str) -> AppResult<()> {
        let board = self.board.as_ref().ok_or(AppError::NoSelection("project"))?;
        if board.task(task_id).is_none() {
            return Err(taskboard_tasks::BoardError::TaskNotFound(task_id.to_string()).into());
        }
        self.selected_task = Some(task_id.to_string());
        Ok(())
    }

    pub fn drag_start(&mut self, task_id: &str) -> AppResult<()> {
        let board = self.board.as_ref().ok_or(AppError::NoSelection("project"))?;
        if board.task(task_id).is_none() {
            return Err(taskboard_tasks::BoardError::TaskNotFound(task_id.to_string()).into());
        }
        self.dragged_task = Some(task_id.to_string());
        Ok(())
    }

    /// Drop the dragged task onto a column. The drag ends either way.
    pub fn drop_task(&mut self, status: &str) -> AppResult<()> {
        let task_id = self
            .dragged_task
            .take()
            .ok_or(AppError::NoSelection("dragged task"))?;
        let board = self.board.as_mut().ok_or(AppError::NoSelection("project"))?;

        let task = board.move_task(&task_id, status)?;
        self.sink.notify(messages::task_moved(task));
        Ok(())
    }

    pub fn set_active(&mut self, is_active: bool) -> AppResult<()> {
        let (board, task_id) = self.selection()?;
        board.set_active(&task_id, is_active)?;
        self.sink.notify(messages::task_updated());
        Ok(())
    }

    pub fn edit_field(&mut self, field: TaskField) -> AppResult<()> {
        let (board, task_id) = self.selection()?;
        board.edit_field(&task_id, field)?;
        self.sink.notify(messages::task_updated());
        Ok(())
    }

    pub fn add_tag(&mut self, text: &str) -> AppResult<()> {
        let (board, task_id) = self.selection()?;
        let outcome = board.add_tag(&task_id, text)?;

        if outcome.vocabulary_grew {
            self.sync_vocabulary()?;
        }
        if outcome.task_changed {
            self.sink.notify(messages::task_updated());
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) -> AppResult<()> {
        let (board, task_id) = self.selection()?;
        board.remove_tag(&task_id, tag)?;
        self.sink.notify(messages::task_updated());
        Ok(())
    }

    pub fn toggle_tag(&mut self, tag: &str) -> AppResult<()> {
        let (board, task_id) = self.selection()?;
        board.toggle_tag(&task_id, tag)?;
        self.sink.notify(messages::task_updated());
        Ok(())
    }

    /// The open board and the id of the selected task on it
    fn selection(&mut self) -> AppResult<(&mut TaskBoard, String)> {
        let task_id = self
            .selected_task
            .clone()
            .ok_or(AppError::NoSelection("task"))?;
        let board = self.board.as_mut().ok_or(AppError::NoSelection("project"))?;
        Ok((board, task_id))
    }

    /// Push the open board's tag vocabulary back into the directory
    fn sync_vocabulary(&mut self) -> AppResult<()> {
        let (Some(board), Some(workspace_id)) =
            (self.board.as_ref(), self.selected_workspace.as_deref())
        else {
            return Ok(());
        };
        let mut workspace = self
            .directory
            .get(workspace_id)
            .cloned()
            .ok_or_else(|| DirectoryError::WorkspaceNotFound(workspace_id.to_string()))?;
        workspace.tags = board.vocabulary().clone();
        self.directory.update_workspace(workspace)?;
        Ok(())
    }

    fn leave_workspace(&mut self) -> AppResult<()> {
        self.close_project()?;
        self.selected_workspace = None;
        Ok(())
    }
}
