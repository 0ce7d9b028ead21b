//! Status command implementation

use std::fmt::Write;

use colored::Colorize;
use i18n_core::{GroupedChanges, Language, required_changes};

use crate::context::Context;
use crate::error::{CliError, Result};

/// How much of the grouped changes to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Counts only
    Summary,
    /// Each token path with its language count
    Paths,
    /// Each token path with its language codes
    Languages,
}

/// Flags of the status command
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusOptions {
    pub verbose: bool,
    pub very_verbose: bool,
    pub json: bool,
    pub fail_on_changes: bool,
}

impl StatusOptions {
    fn detail(&self) -> Detail {
        if self.very_verbose {
            Detail::Languages
        } else if self.verbose {
            Detail::Paths
        } else {
            Detail::Summary
        }
    }
}

/// Run the status command
///
/// Never writes to the translation folder.
pub async fn run_status(context: &Context, options: StatusOptions) -> Result<()> {
    let folder = context.load_folder().await?;
    let changes = required_changes(&folder)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else {
        print!("{}", render_status(&changes, options.detail()));
    }

    if options.fail_on_changes && !changes.is_empty() {
        return Err(CliError::ChangesRequired {
            count: changes.change_count(),
        });
    }
    Ok(())
}

/// Render grouped changes for the terminal
pub fn render_status(changes: &GroupedChanges, detail: Detail) -> String {
    let title = "Required changes:".bold();
    let mut out = String::new();

    if detail == Detail::Summary {
        let _ = writeln!(
            out,
            "{} {} {}",
            title,
            format!("+ {}", changes.to_create.len()).green(),
            format!("- {}", changes.to_delete.len()).red()
        );
        return out;
    }

    let _ = writeln!(out, "{title}");
    for (token_path, languages) in &changes.to_create {
        let line = format!("+ {token_path} {}", in_message(languages, detail));
        let _ = writeln!(out, "{}", line.green());
    }
    for (token_path, languages) in &changes.to_delete {
        let line = format!("- {token_path} {}", in_message(languages, detail));
        let _ = writeln!(out, "{}", line.red());
    }
    out
}

fn in_message(languages: &[Language], detail: Detail) -> String {
    match detail {
        Detail::Languages => {
            let codes: Vec<&str> = languages.iter().map(|language| language.code.as_str()).collect();
            format!("in [{}]", codes.join(", "))
        }
        _ => format!("[{}]", languages.len()),
    }
}
