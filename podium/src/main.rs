// podium/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug podium run ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            project_dir,
            select,
            strict,
        } => commands::run::execute(project_dir, select, strict).await,
        Commands::Check { project_dir } => commands::check::execute(project_dir),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
