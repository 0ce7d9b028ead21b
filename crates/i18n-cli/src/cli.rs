//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// i18n - Keep translation files in sync with the source language
#[derive(Parser, Debug)]
#[command(name = "i18n")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file (default: i18n.toml in the current directory)
    #[arg(short, long, global = true, env = "I18N_CONFIG")]
    pub config: Option<PathBuf>,

    /// Translation folder, overriding the configured one
    #[arg(long, global = true)]
    pub folder: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the changes required to match the source language
    #[command(visible_alias = "s")]
    Status {
        /// List each token path requiring changes
        #[arg(short, long)]
        verbose: bool,

        /// List each token path with the languages requiring it
        #[arg(long)]
        very_verbose: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Exit with status 1 when any change is required
        #[arg(long)]
        fail_on_changes: bool,
    },

    /// Fill missing tokens through the provider and remove obsolete ones
    ///
    /// Examples:
    ///   i18n sync                      # Sync every token path
    ///   i18n sync --limit-retrieve 10  # Only fill the first 10 token paths
    Sync {
        /// Only process the first N token paths requiring creation
        #[arg(long)]
        limit_retrieve: Option<usize>,

        /// Maximum number of provider calls in flight
        #[arg(long)]
        max_concurrency: Option<usize>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   i18n completions bash > ~/.local/share/bash-completion/completions/i18n
    ///   i18n completions zsh > ~/.zfunc/_i18n
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
