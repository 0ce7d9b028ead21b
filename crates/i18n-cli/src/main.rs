//! i18n CLI
//!
//! Keeps per-language translation files aligned with the source language.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, GlobalArgs};
use commands::{StatusOptions, SyncArgs};
use context::Context;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.global.debug) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }

    match cli.command {
        Some(cmd) => {
            let cwd = std::env::current_dir()?;
            execute_command(cmd, &cwd, &cli.global).await
        }
        None => {
            // No command provided - show help hint
            println!("{} Translation file synchronizer", "i18n".green().bold());
            println!();
            println!("Run {} for available commands.", "i18n --help".cyan());
            Ok(())
        }
    }
}

async fn execute_command(cmd: Commands, cwd: &Path, global: &GlobalArgs) -> Result<()> {
    match cmd {
        Commands::Status {
            verbose,
            very_verbose,
            json,
            fail_on_changes,
        } => {
            let context = Context::load(cwd, global)?;
            let options = StatusOptions {
                verbose,
                very_verbose,
                json,
                fail_on_changes,
            };
            commands::run_status(&context, options).await
        }
        Commands::Sync {
            limit_retrieve,
            max_concurrency,
            json,
        } => {
            let context = Context::load(cwd, global)?;
            let args = SyncArgs {
                limit_retrieve,
                max_concurrency,
                json,
            };
            commands::run_sync(&context, args).await
        }
        Commands::Completions { shell } => commands::run_completions(shell, &mut std::io::stdout()),
    }
}
