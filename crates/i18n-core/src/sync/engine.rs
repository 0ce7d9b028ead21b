//! SyncEngine implementation
//!
//! A sync run computes the grouped changes of a folder, fills every token
//! path missing from some targets through the provider, removes obsolete
//! token paths, and writes every file back.

use std::iter;
use std::sync::{Mutex, PoisonError};

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::aggregate::{GroupedChanges, required_changes};
use crate::folder::TranslationFolder;
use crate::format::FileFormat;
use crate::model::{Language, LanguageCode, TranslationTokens};
use crate::provider::{Files, RetrieveRequest, TokenLookup, TokenProvider, lock_files};
use crate::resolver::{read_token, remove_token, write_token};
use crate::{Error, Result};

use super::report::{CreatedToken, DeletedToken, SyncFailure, SyncReport};

/// Options for sync runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOptions {
    /// Only process the first N token paths requiring creation.
    /// The number of languages per path is not limited.
    #[serde(default)]
    pub limit_retrieve: Option<usize>,
    /// Maximum number of provider calls in flight. Unbounded if unset.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

/// Outcome of one creation work item
struct Creation {
    written: Vec<LanguageCode>,
    failures: Vec<SyncFailure>,
}

/// Engine for synchronizing target files with the source file
///
/// The SyncEngine provides two operations:
/// - **check**: Compute the grouped changes without modifying anything
/// - **sync**: Apply them through the provider and persist the folder
pub struct SyncEngine {
    provider: Box<dyn TokenProvider>,
    options: SyncOptions,
}

impl SyncEngine {
    /// Create a new SyncEngine owning `provider`
    pub fn new(provider: Box<dyn TokenProvider>) -> Self {
        Self {
            provider,
            options: SyncOptions::default(),
        }
    }

    /// Replace the run options
    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute the changes a sync of `folder` would apply.
    pub fn check(&self, folder: &TranslationFolder) -> Result<GroupedChanges> {
        required_changes(folder)
    }

    /// Reconcile `folder` in memory, then persist every file.
    ///
    /// Files are written only after all creations and deletions have been
    /// applied. A fatal error aborts the run before anything is written.
    pub async fn sync(&self, folder: &mut TranslationFolder, format: &FileFormat) -> Result<SyncReport> {
        let report = self.reconcile(folder).await?;
        folder.persist(format).await?;

        info!(
            created = report.created.len(),
            deleted = report.deleted.len(),
            failed = report.failures.len(),
            skipped = report.skipped.len(),
            "sync complete"
        );
        Ok(report)
    }

    /// Apply creations then deletions to the in-memory trees of `folder`.
    ///
    /// Creation work items run concurrently. A failing provider call or
    /// write is recorded in the report and does not affect its siblings.
    /// Fatal errors (a language without a loaded file) are returned once
    /// the whole batch has settled, before any deletion.
    pub async fn reconcile(&self, folder: &mut TranslationFolder) -> Result<SyncReport> {
        let GroupedChanges {
            to_create,
            to_delete,
        } = required_changes(folder)?;

        let take = self
            .options
            .limit_retrieve
            .map_or(to_create.len(), |limit| limit.min(to_create.len()));
        let mut report = SyncReport {
            skipped: to_create.keys().skip(take).cloned().collect(),
            ..SyncReport::default()
        };
        if !report.skipped.is_empty() {
            info!(
                processed = take,
                skipped = report.skipped.len(),
                "retrieval limit reached"
            );
        }

        let source = &folder.source_language;
        let targets = &folder.target_languages;
        let files = Mutex::new(std::mem::take(&mut folder.files));

        let mut outcomes: Vec<_> = {
            let lookup = TokenLookup::new(&files);
            let lookup = &lookup;
            let files = &files;
            let concurrency = self.options.max_concurrency.unwrap_or(take).max(1);

            stream::iter(to_create.iter().take(take).enumerate())
                .map(move |(index, (token_path, required))| async move {
                    let outcome = self
                        .create_token(source, targets, files, lookup, token_path, required)
                        .await;
                    (index, token_path, outcome)
                })
                .buffer_unordered(concurrency)
                .collect::<Vec<_>>()
                .await
        };
        folder.files = files.into_inner().unwrap_or_else(PoisonError::into_inner);

        outcomes.sort_by_key(|(index, ..)| *index);
        let mut fatal = None;
        for (_, token_path, outcome) in outcomes {
            match outcome {
                Ok(creation) => {
                    if !creation.written.is_empty() {
                        report.created.push(CreatedToken {
                            token_path: token_path.clone(),
                            languages: creation.written,
                        });
                    }
                    report.failures.extend(creation.failures);
                }
                Err(err) if err.is_fatal() => {
                    fatal.get_or_insert(err);
                }
                Err(err) => {
                    warn!(token_path = %token_path, error = %err, "token creation failed");
                    report.failures.push(SyncFailure {
                        token_path: token_path.clone(),
                        language: None,
                        message: err.to_string(),
                    });
                }
            }
        }
        if let Some(err) = fatal {
            return Err(err);
        }

        for (token_path, languages) in &to_delete {
            let mut removed = Vec::new();
            for language in languages {
                let file = folder.file_mut(&language.code)?;
                match remove_token(&mut file.content, token_path) {
                    Ok(()) => removed.push(language.code.clone()),
                    Err(err) => {
                        warn!(token_path = %token_path, language = %language.code, error = %err, "token removal failed");
                        report.failures.push(SyncFailure {
                            token_path: token_path.clone(),
                            language: Some(language.code.clone()),
                            message: err.to_string(),
                        });
                    }
                }
            }
            if !removed.is_empty() {
                debug!(token_path = %token_path, languages = ?removed, "removed token");
                report.deleted.push(DeletedToken {
                    token_path: token_path.clone(),
                    languages: removed,
                });
            }
        }

        Ok(report)
    }

    /// Fill one token path for the languages in `required`.
    async fn create_token(
        &self,
        source: &Language,
        targets: &[Language],
        files: &Mutex<Files>,
        lookup: &TokenLookup<'_>,
        token_path: &str,
        required: &[Language],
    ) -> Result<Creation> {
        let is_required = |code: &str| required.iter().any(|language| language.code == code);

        let up_to_date_target_languages: Vec<Language> = targets
            .iter()
            .filter(|language| !is_required(&language.code))
            .cloned()
            .collect();

        let up_to_date_tokens = {
            let guard = lock_files(files);
            let mut tokens = TranslationTokens::new();
            for language in up_to_date_target_languages.iter().chain(iter::once(source)) {
                let file = guard.get(&language.code).ok_or_else(|| Error::FileNotFound {
                    code: language.code.clone(),
                })?;
                let token = read_token(&file.content, token_path)?;
                tokens.insert(language.code.clone(), token.clone());
            }
            tokens
        };

        let required_codes: Vec<&str> = required.iter().map(|language| language.code.as_str()).collect();
        debug!(
            token_path,
            provider = self.provider.id(),
            required = ?required_codes,
            "retrieving tokens"
        );
        let retrieved = self
            .provider
            .retrieve(RetrieveRequest {
                token_path,
                source_language: source,
                up_to_date_tokens,
                required_target_languages: required,
                up_to_date_target_languages,
                lookup,
            })
            .await?;

        let mut creation = Creation {
            written: Vec::new(),
            failures: Vec::new(),
        };
        let mut guard = lock_files(files);
        for (code, token) in retrieved {
            if !is_required(&code) {
                warn!(token_path, language = %code, "ignoring token for a language that does not require it");
                continue;
            }
            let file = guard
                .get_mut(&code)
                .ok_or_else(|| Error::FileNotFound { code: code.clone() })?;
            match write_token(&mut file.content, token_path, token) {
                Ok(()) => creation.written.push(code),
                Err(err) => {
                    warn!(token_path, language = %code, error = %err, "token write failed");
                    creation.failures.push(SyncFailure {
                        token_path: token_path.to_string(),
                        language: Some(code),
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(creation)
    }
}
