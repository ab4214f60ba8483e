//! Autocommit - Scheduled Placeholder Commits
//!
//! Autocommit writes a placeholder source file into a git working tree,
//! commits it, and pushes it to a remote with embedded credentials, without
//! losing uncommitted local work. It runs once or on a fixed interval.

mod auth;
mod cli;
mod config;
mod error;
mod git;
mod scheduler;
mod workflow;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, TokenCommands};
use crate::error::Result;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(config::settings::env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    // Run the command
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        if e.requires_setup() {
            eprintln!("Run 'autocommit init' to create a config file, then fill it in.");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { options, stash } => cli::commands::handle_run(&options, stash),
        Commands::Watch {
            options,
            interval_minutes,
            stash,
        } => cli::commands::handle_watch(&options, interval_minutes, stash).await,
        Commands::Token { command } => match command {
            TokenCommands::Set => cli::commands::handle_token_set(),
            TokenCommands::Clear => cli::commands::handle_token_clear(),
            TokenCommands::Status => cli::commands::handle_token_status(),
        },
        Commands::Init { force } => cli::commands::handle_init(force),
        Commands::Completions { shell } => cli::commands::handle_completions(shell),
    }
}
