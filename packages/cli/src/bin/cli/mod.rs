pub mod demo;
pub mod interactive;

use taskboard_app::App;
use taskboard_cli::{render, Config};
use taskboard_core::NotificationSink;

/// Build the application for the configured auth mode, seeding demo data when enabled
pub fn build_app<S: NotificationSink>(config: &Config, sink: S) -> App<S> {
    let app = App::with_sink(config.auth_mode, sink);
    if config.seed_demo {
        app.with_demo_data()
    } else {
        app
    }
}

/// Print the open board under the current filter, or a hint when none is open
pub fn print_board<S: NotificationSink>(app: &App<S>) {
    use colored::*;

    let Some(board) = app.board() else {
        println!("{}", "No project open".yellow());
        return;
    };
    let workspace = app
        .selected_workspace()
        .map(|ws| ws.name.as_str())
        .unwrap_or("—");
    println!(
        "{}",
        format!("📋 {} / project {}", workspace, board.project_id())
            .blue()
            .bold()
    );
    println!("{}", render::board_table(&app.columns()));
    println!("Filter: {}", app.filter().to_string().cyan());
}
