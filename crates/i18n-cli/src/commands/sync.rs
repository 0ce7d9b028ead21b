//! Sync command implementation

use std::fmt::Write;

use colored::Colorize;
use i18n_core::{SyncEngine, SyncOptions, SyncReport, TokenProvider};

use crate::context::Context;
use crate::error::{CliError, Result};

/// Flags of the sync command, overriding the `[sync]` section
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncArgs {
    pub limit_retrieve: Option<usize>,
    pub max_concurrency: Option<usize>,
    pub json: bool,
}

impl SyncArgs {
    fn apply(&self, mut options: SyncOptions) -> SyncOptions {
        if self.limit_retrieve.is_some() {
            options.limit_retrieve = self.limit_retrieve;
        }
        if self.max_concurrency.is_some() {
            options.max_concurrency = self.max_concurrency;
        }
        options
    }
}

/// Run the sync command
pub async fn run_sync(context: &Context, args: SyncArgs) -> Result<()> {
    let settings = context.config.provider.as_ref().ok_or_else(|| {
        CliError::user("No provider configured. Add a [provider] section to run sync.")
    })?;

    let options = args.apply(context.config.sync);
    if options.max_concurrency == Some(0) {
        return Err(CliError::user("--max-concurrency must be at least 1"));
    }

    let provider = i18n_providers::from_settings(settings, &context.config.config_dir);
    tracing::debug!(provider = provider.id(), ?options, "starting sync");
    let engine = SyncEngine::new(provider).with_options(options);

    let mut folder = context.load_folder().await?;
    let report = engine.sync(&mut folder, &context.config.format).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Render a sync report for the terminal
pub fn render_report(report: &SyncReport) -> String {
    let mut out = String::new();

    if report.is_noop() && report.failures.is_empty() && report.skipped.is_empty() {
        let _ = writeln!(out, "{}", "Translation files are in sync".green());
        return out;
    }

    if !report.created.is_empty() {
        let _ = writeln!(out, "{} {}", "Created:".bold(), report.created.len());
        for created in &report.created {
            let line = format!("+ {} in [{}]", created.token_path, created.languages.join(", "));
            let _ = writeln!(out, "  {}", line.green());
        }
    }
    if !report.deleted.is_empty() {
        let _ = writeln!(out, "{} {}", "Deleted:".bold(), report.deleted.len());
        for deleted in &report.deleted {
            let line = format!("- {} in [{}]", deleted.token_path, deleted.languages.join(", "));
            let _ = writeln!(out, "  {}", line.red());
        }
    }
    if !report.failures.is_empty() {
        let _ = writeln!(out, "{} {}", "Failed:".bold(), report.failures.len());
        for failure in &report.failures {
            let target = match &failure.language {
                Some(language) => format!("{} [{}]", failure.token_path, language),
                None => failure.token_path.clone(),
            };
            let _ = writeln!(out, "  {} {}: {}", "!".yellow(), target, failure.message);
        }
    }
    if !report.skipped.is_empty() {
        let _ = writeln!(
            out,
            "{} {} token path(s) left for a later run (retrieval limit)",
            "Skipped:".bold(),
            report.skipped.len()
        );
    }
    out
}
