//! TokenProvider trait and related types
//!
//! The sync engine does not produce translations itself. For every token
//! path missing from some languages it asks a [`TokenProvider`] for the new
//! values, handing over everything already known about that token.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::folder::TranslationFile;
use crate::model::{Language, LanguageCode, Node, TokenPath, TranslationTokens};
use crate::resolver::{SEPARATOR, read_token};
use crate::Result;

pub(crate) type Files = IndexMap<LanguageCode, TranslationFile>;

pub(crate) fn lock_files(files: &Mutex<Files>) -> MutexGuard<'_, Files> {
    files.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read access to the current in-memory trees during a sync.
///
/// Values are recomputed on every call, so tokens written by work items that
/// already completed are visible to later lookups.
pub struct TokenLookup<'a> {
    files: &'a Mutex<Files>,
}

impl<'a> TokenLookup<'a> {
    pub(crate) fn new(files: &'a Mutex<Files>) -> Self {
        Self { files }
    }

    /// Current token at `token_path` for every loaded language that has one.
    ///
    /// Languages whose tree cannot resolve the path are left out.
    pub fn tokens_at(&self, token_path: &str) -> TranslationTokens {
        let files = lock_files(self.files);
        files
            .iter()
            .filter_map(|(code, file)| {
                read_token(&file.content, token_path)
                    .ok()
                    .map(|token| (code.clone(), token.clone()))
            })
            .collect()
    }

    /// Other token paths of the category holding `token_path`, in any
    /// loaded language, sorted.
    ///
    /// Nested categories are not descended into.
    pub fn sibling_paths(&self, token_path: &str) -> Vec<TokenPath> {
        let parent = token_path.rsplit_once(SEPARATOR).map(|(parent, _)| parent);
        let files = lock_files(self.files);

        let mut paths = BTreeSet::new();
        for file in files.values() {
            let category = match parent {
                Some(parent) => parent
                    .split(SEPARATOR)
                    .try_fold(&file.content, |category, segment| {
                        category.get(segment)?.as_category()
                    }),
                None => Some(&file.content),
            };
            let Some(category) = category else { continue };

            for (key, node) in category {
                if !matches!(node, Node::Token(_)) {
                    continue;
                }
                let path = match parent {
                    Some(parent) => format!("{parent}{SEPARATOR}{key}"),
                    None => key.clone(),
                };
                if path != token_path {
                    paths.insert(path);
                }
            }
        }
        paths.into_iter().collect()
    }
}

/// Everything a provider gets to fill one token path.
pub struct RetrieveRequest<'a> {
    /// The token path to fill
    pub token_path: &'a str,
    pub source_language: &'a Language,
    /// Current values of the source and of every up-to-date target
    pub up_to_date_tokens: TranslationTokens,
    /// Languages the provider must produce a value for
    pub required_target_languages: &'a [Language],
    /// Targets that already hold this token
    pub up_to_date_target_languages: Vec<Language>,
    /// Lookup of any other token path, e.g. for context
    pub lookup: &'a TokenLookup<'a>,
}

/// Source of new token values.
///
/// Implementations return a value for some or all of
/// `required_target_languages`. Entries for other languages are ignored.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    fn id(&self) -> &str;
    async fn retrieve(&self, request: RetrieveRequest<'_>) -> Result<TranslationTokens>;
}
