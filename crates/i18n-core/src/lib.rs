//! Core synchronization layer for i18n-sync
//!
//! This crate keeps per-language translation files aligned with a canonical
//! source-language file. It implements:
//!
//! - **Path resolution**: read, write and remove a token at a dotted path,
//!   pruning categories left without tokens
//! - **Flattening**: map every token of a tree to its dotted path
//! - **Diffing**: per-target create/delete sets relative to the source
//! - **Aggregation**: per-token-path groups of languages requiring a change
//! - **SyncEngine**: concurrent provider calls for missing tokens, removal of
//!   obsolete ones, and persistence of every file
//!
//! # Architecture
//!
//! ```text
//!                    i18n-cli
//!                       |
//!          i18n-providers (TokenProvider impls)
//!                       |
//!                   i18n-core
//!                       |
//!                    i18n-fs
//! ```
//!
//! # Example
//!
//! ```
//! use i18n_core::{Category, Node, flatten, resolver};
//!
//! let mut tree = Category::new();
//! resolver::write_token(&mut tree, "home.title", "Home".to_string()).unwrap();
//! resolver::write_token(&mut tree, "welcome", "Welcome".to_string()).unwrap();
//!
//! let paths: Vec<_> = flatten::flatten(&tree).into_keys().collect();
//! assert_eq!(paths, vec!["home.title", "welcome"]);
//!
//! resolver::remove_token(&mut tree, "home.title").unwrap();
//! assert!(!tree.contains_key("home"));
//! assert!(matches!(tree.get("welcome"), Some(Node::Token(_))));
//! ```

pub mod aggregate;
pub mod config;
pub mod diff;
pub mod error;
pub mod flatten;
pub mod folder;
pub mod format;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod sync;

pub use aggregate::{GroupedChanges, group_by_token_path, required_changes};
pub use config::{ConfigResolver, Manifest, ProviderSettings, ResolvedConfig};
pub use diff::{FolderRequiredChanges, RequiredChanges, compute_folder_required_changes, diff_trees};
pub use error::{Error, Result};
pub use folder::{TranslationFile, TranslationFolder, parse_translation_file};
pub use format::{FileFormat, stringify};
pub use model::{
    Category, Language, LanguageCode, Node, Token, TokenPath, TranslationFileContent,
    TranslationTokens,
};
pub use provider::{RetrieveRequest, TokenLookup, TokenProvider};
pub use sync::{CreatedToken, DeletedToken, SyncEngine, SyncFailure, SyncOptions, SyncReport};
