use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use taskboard_cli::{init_tracing, Config};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - in-memory kanban for teams")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through login, task creation and a drag-and-drop move
    Demo {
        /// Send notifications to the log instead of the terminal
        #[arg(short, long)]
        quiet: bool,
    },
    /// Menu-driven session against the in-memory board
    Interactive,
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    match command {
        Commands::Demo { quiet } => cli::demo::run_demo(&config, quiet),
        Commands::Interactive => cli::interactive::run_interactive(&config),
    }
}
