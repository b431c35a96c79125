// ABOUTME: Menu-driven terminal session over the application state
// ABOUTME: Offers the actions available for the current selection and turns answers into events

use colored::*;
use inquire::{InquireError, Password, Select, Text};
use std::fmt;
use taskboard_app::{App, Event};
use taskboard_cli::{render, Config, ConsoleSink};
use taskboard_tasks::{TaskCreateInput, TaskField, TaskFilter, TaskPriority};
use taskboard_workspaces::{ProjectCreateInput, WorkspaceCreateInput};

use super::{build_app, print_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Login,
    Register,
    Logout,
    SelectWorkspace,
    CreateWorkspace,
    CloseWorkspace,
    OpenProject,
    CreateProject,
    CloseProject,
    ShowBoard,
    CreateTask,
    MoveTask,
    EditTask,
    TagTask,
    SetFilter,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Login => "Log in",
            Action::Register => "Register",
            Action::Logout => "Log out",
            Action::SelectWorkspace => "Select workspace",
            Action::CreateWorkspace => "Create workspace",
            Action::CloseWorkspace => "Back to workspaces",
            Action::OpenProject => "Open project",
            Action::CreateProject => "Create project",
            Action::CloseProject => "Back to projects",
            Action::ShowBoard => "Show board",
            Action::CreateTask => "Create task",
            Action::MoveTask => "Move task",
            Action::EditTask => "Edit task",
            Action::TagTask => "Tags of a task",
            Action::SetFilter => "Filter tasks",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

type TerminalApp = App<ConsoleSink>;

fn available_actions(app: &TerminalApp) -> Vec<Action> {
    let mut actions = Vec::new();
    if app.current_user().is_none() {
        actions.extend([Action::Login, Action::Register]);
    } else if app.board().is_some() {
        actions.extend([
            Action::ShowBoard,
            Action::CreateTask,
            Action::MoveTask,
            Action::EditTask,
            Action::TagTask,
            Action::SetFilter,
            Action::CloseProject,
            Action::Logout,
        ]);
    } else if app.selected_workspace().is_some() {
        actions.extend([
            Action::OpenProject,
            Action::CreateProject,
            Action::CloseWorkspace,
            Action::Logout,
        ]);
    } else {
        actions.push(Action::SelectWorkspace);
        if app.can_create_workspace() {
            actions.push(Action::CreateWorkspace);
        }
        actions.push(Action::Logout);
    }
    actions.push(Action::Quit);
    actions
}

pub fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let mut app = build_app(config, ConsoleSink::new());
    println!("{}", "🗂  Taskboard".blue().bold());
    println!("{}", format!("Auth mode: {}", config.auth_mode).dimmed());

    loop {
        let action = match Select::new("What next?", available_actions(&app)).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };
        if action == Action::Quit {
            break;
        }

        let events = match build_events(&app, action) {
            Ok(events) => events,
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };
        for event in events {
            if let Err(e) = app.handle(event) {
                if e.is_silent() {
                    println!("{}", "Nothing changed".dimmed());
                } else {
                    println!("{}", e.to_string().red());
                }
                break;
            }
        }

        if app.board().is_some() && action != Action::ShowBoard {
            print_board(&app);
        }
    }

    app.logout();
    println!("{}", "Bye".dimmed());
    Ok(())
}

/// Ask for whatever the action needs and return the events to send, in order
fn build_events(app: &TerminalApp, action: Action) -> Result<Vec<Event>, InquireError> {
    let event = match action {
        Action::Login => Event::Login {
            username: Text::new("Username:").prompt()?,
            password: Password::new("Password:").without_confirmation().prompt()?,
        },
        Action::Register => Event::Register {
            username: Text::new("Username:").prompt()?,
            password: Password::new("Password:").prompt()?,
        },
        Action::Logout => Event::Logout,
        Action::SelectWorkspace => {
            let workspaces = app.visible_workspaces();
            if workspaces.is_empty() {
                println!("{}", "No workspaces yet".yellow());
                return Ok(Vec::new());
            }
            println!("{}", render::workspaces_table(&workspaces));
            let labels: Vec<String> = workspaces
                .iter()
                .map(|ws| format!("{} · {}", ws.id, ws.name))
                .collect();
            let choice = Select::new("Workspace:", labels).raw_prompt()?;
            Event::SelectWorkspace {
                workspace_id: workspaces[choice.index].id.clone(),
            }
        }
        Action::CreateWorkspace => Event::CreateWorkspace(WorkspaceCreateInput {
            name: Text::new("Workspace name:").prompt()?,
            description: Text::new("Description (optional):").prompt()?,
        }),
        Action::CloseWorkspace => Event::CloseWorkspace,
        Action::OpenProject => {
            let Some(workspace) = app.selected_workspace() else {
                return Ok(Vec::new());
            };
            if workspace.projects.is_empty() {
                println!("{}", "No projects yet".yellow());
                return Ok(Vec::new());
            }
            let labels: Vec<String> = workspace
                .projects
                .iter()
                .map(|p| format!("{} · {}", p.name, p.description))
                .collect();
            let choice = Select::new("Project:", labels).raw_prompt()?;
            Event::OpenProject {
                project_id: workspace.projects[choice.index].id.clone(),
            }
        }
        Action::CreateProject => Event::CreateProject(ProjectCreateInput {
            name: Text::new("Project name:").prompt()?,
            description: Text::new("Description (optional):").prompt()?,
        }),
        Action::CloseProject => Event::CloseProject,
        Action::ShowBoard => {
            print_board(app);
            return Ok(Vec::new());
        }
        Action::CreateTask => Event::CreateTask(TaskCreateInput {
            title: Text::new("Title:").prompt()?,
            description: Text::new("Description (optional):").prompt()?,
            status: Some(Select::new("Column:", board_statuses(app)).prompt()?),
            priority: Select::new(
                "Priority:",
                vec![TaskPriority::Medium, TaskPriority::High, TaskPriority::Low],
            )
            .prompt()?,
            assignee: None,
        }),
        Action::MoveTask => {
            let Some(task_id) = pick_task(app)? else {
                return Ok(Vec::new());
            };
            let status = Select::new("Move to:", board_statuses(app)).prompt()?;
            // A move is a drag immediately followed by a drop
            return Ok(vec![Event::DragStart { task_id }, Event::Drop { status }]);
        }
        Action::EditTask => {
            let Some(task_id) = pick_task(app)? else {
                return Ok(Vec::new());
            };
            let edit = pick_edit(app)?;
            return Ok(vec![Event::SelectTask { task_id }, edit]);
        }
        Action::TagTask => {
            let Some(task_id) = pick_task(app)? else {
                return Ok(Vec::new());
            };
            let edit = pick_tag_edit(app, &task_id)?;
            return Ok(vec![Event::SelectTask { task_id }, edit]);
        }
        Action::SetFilter => Event::SetFilter {
            filter: Select::new(
                "Show:",
                vec![TaskFilter::All, TaskFilter::Active, TaskFilter::Closed],
            )
            .prompt()?,
        },
        Action::Quit => return Ok(Vec::new()),
    };
    Ok(vec![event])
}

fn board_statuses(app: &TerminalApp) -> Vec<String> {
    app.board()
        .map(|board| board.statuses().to_vec())
        .unwrap_or_default()
}

/// Choose one task of the open board, regardless of the filter
fn pick_task(app: &TerminalApp) -> Result<Option<String>, InquireError> {
    let Some(board) = app.board() else {
        return Ok(None);
    };
    if board.tasks().is_empty() {
        println!("{}", "The board has no tasks".yellow());
        return Ok(None);
    }
    let labels: Vec<String> = board
        .tasks()
        .iter()
        .map(|t| format!("[{}] {} ({})", t.id, t.title, t.status))
        .collect();
    let choice = Select::new("Task:", labels).raw_prompt()?;
    Ok(Some(board.tasks()[choice.index].id.clone()))
}

fn pick_edit(app: &TerminalApp) -> Result<Event, InquireError> {
    let options = vec!["Open/close", "Description", "Column", "Priority", "Assignee"];
    let event = match Select::new("Change:", options).prompt()? {
        "Open/close" => Event::ToggleActive {
            is_active: Select::new("State:", vec!["open", "closed"]).prompt()? == "open",
        },
        "Description" => {
            Event::EditField(TaskField::Description(Text::new("Description:").prompt()?))
        }
        "Column" => Event::EditField(TaskField::Status(
            Select::new("Column:", board_statuses(app)).prompt()?,
        )),
        "Priority" => Event::EditField(TaskField::Priority(
            Select::new(
                "Priority:",
                vec![TaskPriority::Low, TaskPriority::Medium, TaskPriority::High],
            )
            .prompt()?,
        )),
        _ => {
            let members = app
                .selected_workspace()
                .map(|ws| ws.members.clone())
                .unwrap_or_default();
            let mut options = vec!["(nobody)".to_string()];
            options.extend(members);
            let choice = Select::new("Assignee:", options).prompt()?;
            let assignee = (choice != "(nobody)").then_some(choice);
            Event::EditField(TaskField::Assignee(assignee))
        }
    };
    Ok(event)
}

fn pick_tag_edit(app: &TerminalApp, task_id: &str) -> Result<Event, InquireError> {
    let vocabulary: Vec<String> = app
        .board()
        .map(|board| board.vocabulary().iter().map(String::from).collect())
        .unwrap_or_default();
    let on_task: Vec<String> = app
        .board()
        .and_then(|board| board.task(task_id))
        .map(|task| task.tags.clone())
        .unwrap_or_default();

    let options = vec!["Add a new tag", "Toggle a known tag", "Remove a tag"];
    let event = match Select::new("Tags:", options).prompt()? {
        "Add a new tag" => Event::AddTag {
            text: Text::new("Tag:").prompt()?,
        },
        "Toggle a known tag" if !vocabulary.is_empty() => Event::ToggleTag {
            tag: Select::new("Tag:", vocabulary).prompt()?,
        },
        "Remove a tag" if !on_task.is_empty() => Event::RemoveTag {
            tag: Select::new("Tag:", on_task).prompt()?,
        },
        _ => {
            println!("{}", "No tags to choose from".yellow());
            return Err(InquireError::OperationCanceled);
        }
    };
    Ok(event)
}
