// ABOUTME: Terminal rendering of boards, workspaces and notifications
// ABOUTME: Builds comfy-table tables and colored lines without printing them

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use taskboard_core::Notification;
use taskboard_tasks::{Column, Task, TaskPriority};
use taskboard_workspaces::Workspace;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Header text of a column: status name and task count
pub fn column_header(column: &Column<'_>) -> String {
    format!("{} ({})", column.status, column.count())
}

/// Multi-line card for one task
pub fn task_card(task: &Task) -> String {
    let mut card = format!("[{}] {}", task.id, task.title);
    card.push_str(&format!("\n{}", priority_label(task.priority)));
    if !task.tags.is_empty() {
        card.push_str(&format!("\n#{}", task.tags.join(" #")));
    }
    if let Some(assignee) = &task.assignee {
        card.push_str(&format!("\n@{}", assignee));
    }
    if !task.is_active {
        card.push_str("\n(закрыта)");
    }
    card
}

fn priority_label(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "Высокий",
        TaskPriority::Medium => "Средний",
        TaskPriority::Low => "Низкий",
    }
}

/// One table column per status; row `i` holds the `i`-th card of every column
pub fn board_table(columns: &[Column<'_>]) -> Table {
    let mut table = new_table();
    table.set_header(columns.iter().map(column_header).collect::<Vec<_>>());

    let depth = columns.iter().map(|c| c.count()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(
            columns
                .iter()
                .map(|c| c.tasks.get(row).map(|t| task_card(t)).unwrap_or_default())
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn workspaces_table(workspaces: &[&Workspace]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Projects", "Members", "Tags"]);

    for workspace in workspaces {
        let tags = if workspace.tags.is_empty() {
            "—".to_string()
        } else {
            workspace.tags.as_slice().join(", ")
        };
        table.add_row(vec![
            workspace.id.clone(),
            workspace.name.clone(),
            workspace.projects.len().to_string(),
            workspace.members.join(", "),
            tags,
        ]);
    }
    table
}

pub fn notification_line(notification: &Notification) -> String {
    let title = if notification.kind.is_error() {
        notification.title.red().bold()
    } else {
        notification.title.green().bold()
    };
    format!("{} {}", title, notification.description)
}
