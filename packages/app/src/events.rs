// ABOUTME: Input events consumed by the application
// ABOUTME: One variant per discrete user action of the presentation layer

use serde::{Deserialize, Serialize};
use taskboard_tasks::{TaskCreateInput, TaskField, TaskFilter};
use taskboard_workspaces::{ProjectCreateInput, WorkspaceCreateInput};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Login { username: String, password: String },
    Register { username: String, password: String },
    Logout,

    CreateWorkspace(WorkspaceCreateInput),
    SelectWorkspace { workspace_id: String },
    CloseWorkspace,

    CreateProject(ProjectCreateInput),
    OpenProject { project_id: String },
    CloseProject,

    SetFilter { filter: TaskFilter },
    CreateTask(TaskCreateInput),
    SelectTask { task_id: String },
    DragStart { task_id: String },
    Drop { status: String },

    // The following act on the selected task
    ToggleActive { is_active: bool },
    EditField(TaskField),
    AddTag { text: String },
    RemoveTag { tag: String },
    ToggleTag { tag: String },
}

impl Event {
    /// Event name for logs; never includes credentials
    pub fn name(&self) -> &'static str {
        match self {
            Event::Login { .. } => "login",
            Event::Register { .. } => "register",
            Event::Logout => "logout",
            Event::CreateWorkspace(_) => "create_workspace",
            Event::SelectWorkspace { .. } => "select_workspace",
            Event::CloseWorkspace => "close_workspace",
            Event::CreateProject(_) => "create_project",
            Event::OpenProject { .. } => "open_project",
            Event::CloseProject => "close_project",
            Event::SetFilter { .. } => "set_filter",
            Event::CreateTask(_) => "create_task",
            Event::SelectTask { .. } => "select_task",
            Event::DragStart { .. } => "drag_start",
            Event::Drop { .. } => "drop",
            Event::ToggleActive { .. } => "toggle_active",
            Event::EditField(_) => "edit_field",
            Event::AddTag { .. } => "add_tag",
            Event::RemoveTag { .. } => "remove_tag",
            Event::ToggleTag { .. } => "toggle_tag",
        }
    }
}
