//! Grouping of per-file changes by token path
//!
//! The diff engine answers "what does each language need?". The sync engine
//! works per token path instead, so that one provider call can fill a token
//! for every language missing it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::diff::{FolderRequiredChanges, compute_folder_required_changes};
use crate::folder::TranslationFolder;
use crate::model::{Language, TokenPath};
use crate::{Error, Result};

/// Languages requiring each token path to be created or deleted.
///
/// Insertion order is the order of language iteration, then the order of
/// paths within each language's change list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedChanges {
    pub to_create: IndexMap<TokenPath, Vec<Language>>,
    pub to_delete: IndexMap<TokenPath, Vec<Language>>,
}

impl GroupedChanges {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete.is_empty()
    }

    /// Number of distinct token paths requiring any change.
    pub fn change_count(&self) -> usize {
        self.to_create.len() + self.to_delete.len()
    }
}

/// Invert per-language changes into per-token-path language lists.
///
/// # Errors
///
/// Returns [`Error::LanguageNotFound`] if a change references a language code
/// absent from `target_languages`.
pub fn group_by_token_path(
    changes: &FolderRequiredChanges,
    target_languages: &[Language],
) -> Result<GroupedChanges> {
    let mut grouped = GroupedChanges::default();

    for (language_code, file_changes) in changes {
        if file_changes.is_empty() {
            continue;
        }
        let language = target_languages
            .iter()
            .find(|language| &language.code == language_code)
            .ok_or_else(|| Error::LanguageNotFound {
                code: language_code.clone(),
            })?;

        for token_path in &file_changes.token_paths_to_create {
            grouped
                .to_create
                .entry(token_path.clone())
                .or_default()
                .push(language.clone());
        }

        for token_path in &file_changes.token_paths_to_delete {
            grouped
                .to_delete
                .entry(token_path.clone())
                .or_default()
                .push(language.clone());
        }
    }

    Ok(grouped)
}

/// Diff every target of `folder` and group the result by token path.
pub fn required_changes(folder: &TranslationFolder) -> Result<GroupedChanges> {
    let changes = compute_folder_required_changes(folder)?;
    group_by_token_path(&changes, &folder.target_languages)
}
