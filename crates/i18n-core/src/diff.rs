//! Per-file diffing against the source language
//!
//! The source file's token paths define what every target must contain.
//! For each target, paths missing from it are to be created and paths the
//! source does not know are to be deleted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::flatten::flatten;
use crate::folder::TranslationFolder;
use crate::model::{Category, LanguageCode, TokenPath};
use crate::Result;

/// Changes one target file needs to match the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredChanges {
    /// Paths in the source, absent from the target (source order)
    pub token_paths_to_create: Vec<TokenPath>,
    /// Paths in the target, absent from the source (target order)
    pub token_paths_to_delete: Vec<TokenPath>,
}

impl RequiredChanges {
    pub fn is_empty(&self) -> bool {
        self.token_paths_to_create.is_empty() && self.token_paths_to_delete.is_empty()
    }
}

/// Required changes keyed by target language code, in target order.
pub type FolderRequiredChanges = IndexMap<LanguageCode, RequiredChanges>;

/// Compare a target tree against the source tree.
pub fn diff_trees(source: &Category, target: &Category) -> RequiredChanges {
    let source_paths = flatten(source);
    let target_paths = flatten(target);

    let token_paths_to_create = source_paths
        .keys()
        .filter(|path| !target_paths.contains_key(*path))
        .cloned()
        .collect();
    let token_paths_to_delete = target_paths
        .keys()
        .filter(|path| !source_paths.contains_key(*path))
        .cloned()
        .collect();

    RequiredChanges {
        token_paths_to_create,
        token_paths_to_delete,
    }
}

/// Compute the required changes of every target file in `folder`.
///
/// # Errors
///
/// Returns [`crate::Error::FileNotFound`] if the source or a target language
/// has no loaded file.
pub fn compute_folder_required_changes(folder: &TranslationFolder) -> Result<FolderRequiredChanges> {
    let source = folder.file(&folder.source_language.code)?;

    let mut changes = FolderRequiredChanges::new();
    for target_language in &folder.target_languages {
        let target = folder.file(&target_language.code)?;
        let file_changes = diff_trees(&source.content, &target.content);
        tracing::debug!(
            language = %target_language.code,
            create = file_changes.token_paths_to_create.len(),
            delete = file_changes.token_paths_to_delete.len(),
            "computed required changes"
        );
        changes.insert(target.language_code.clone(), file_changes);
    }

    Ok(changes)
}
