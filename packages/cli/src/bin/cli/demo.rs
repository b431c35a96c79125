// ABOUTME: Scripted walkthrough of the kanban against in-memory state
// ABOUTME: Logs in, creates and drags a task, then shows registration rules

use colored::*;
use taskboard_app::seed::{DEMO_PROJECT_ID, DEMO_WORKSPACE_ID};
use taskboard_app::{App, AppError, Event};
use taskboard_cli::{render, Config, ConsoleSink};
use taskboard_core::{NotificationSink, TracingSink, ADMIN_PASSWORD, ADMIN_USERNAME};
use taskboard_tasks::TaskCreateInput;
use taskboard_workspaces::{ProjectCreateInput, WorkspaceCreateInput};

use super::{build_app, print_board};

pub fn run_demo(config: &Config, quiet: bool) -> anyhow::Result<()> {
    if quiet {
        script(&mut build_app(config, TracingSink))
    } else {
        script(&mut build_app(config, ConsoleSink::new()))
    }
}

fn step(text: &str) {
    println!();
    println!("{}", format!("▶ {}", text).blue().bold());
}

/// Run an event whose failure is part of the walkthrough
fn expect_rejection<S: NotificationSink>(app: &mut App<S>, event: Event) {
    match app.handle(event) {
        Ok(()) => println!("{}", "unexpectedly accepted".yellow()),
        Err(e) if e.is_silent() => println!("{}", format!("ignored: {}", e).dimmed()),
        Err(e) => println!("{}", format!("rejected: {}", e).dimmed()),
    }
}

fn script<S: NotificationSink>(app: &mut App<S>) -> anyhow::Result<()> {
    step("Administrator login");
    app.handle(Event::Login {
        username: ADMIN_USERNAME.into(),
        password: ADMIN_PASSWORD.into(),
    })?;
    let (workspace_id, project_id) = ensure_board(app)?;
    println!("{}", render::workspaces_table(&app.visible_workspaces()));

    app.handle(Event::SelectWorkspace { workspace_id })?;
    app.handle(Event::OpenProject { project_id })?;
    print_board(app);

    step("Task with an empty title");
    expect_rejection(app, Event::CreateTask(TaskCreateInput::default()));

    step("Create \"Fix bug\"");
    app.handle(Event::CreateTask(TaskCreateInput {
        title: "Fix bug".into(),
        ..Default::default()
    }))?;
    print_board(app);

    let Some(task_id) = app
        .board()
        .and_then(|b| b.tasks().iter().find(|t| t.title == "Fix bug"))
        .map(|t| t.id.clone())
    else {
        anyhow::bail!("created task is missing from the board");
    };
    let target = app
        .board()
        .and_then(|b| b.statuses().last().cloned())
        .ok_or(AppError::NoSelection("project"))?;

    step(&format!("Drag \"Fix bug\" to {}", target));
    app.handle(Event::DragStart { task_id })?;
    app.handle(Event::Drop { status: target })?;
    print_board(app);

    step("Register alice");
    app.handle(Event::Register {
        username: "alice".into(),
        password: "pw1".into(),
    })?;
    if let Some(user) = app.current_user() {
        println!(
            "alice is bound to workspace {}",
            user.workspace_id.as_deref().unwrap_or("—").cyan()
        );
    }
    println!(
        "visible workspaces: {}",
        app.visible_workspaces().len().to_string().cyan()
    );

    step("Register alice again");
    app.handle(Event::Logout)?;
    expect_rejection(
        app,
        Event::Register {
            username: "alice".into(),
            password: "pw1".into(),
        },
    );

    println!();
    println!("{}", "✅ Demo finished".green());
    Ok(())
}

/// Ids of the board the walkthrough uses, creating one when demo data is disabled
fn ensure_board<S: NotificationSink>(app: &mut App<S>) -> anyhow::Result<(String, String)> {
    if let Some(workspace) = app.directory().get(DEMO_WORKSPACE_ID) {
        if workspace.project(DEMO_PROJECT_ID).is_some() {
            return Ok((DEMO_WORKSPACE_ID.to_string(), DEMO_PROJECT_ID.to_string()));
        }
    }

    let workspace = app.create_workspace(WorkspaceCreateInput {
        name: "Demo".into(),
        description: "Created for the walkthrough".into(),
    })?;
    app.select_workspace(&workspace.id)?;
    let project = app.create_project(ProjectCreateInput {
        name: "Board".into(),
        description: String::new(),
    })?;
    Ok((workspace.id, project.id))
}
