//! Report types for sync runs

use serde::{Deserialize, Serialize};

use crate::model::{LanguageCode, TokenPath};

/// A token path filled for some languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedToken {
    pub token_path: TokenPath,
    /// Languages that received a value, sorted by language code
    pub languages: Vec<LanguageCode>,
}

/// A token path removed from some languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedToken {
    pub token_path: TokenPath,
    pub languages: Vec<LanguageCode>,
}

/// A creation work item, or one of its writes, that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFailure {
    pub token_path: TokenPath,
    /// Set when only the write for this language failed
    pub language: Option<LanguageCode>,
    pub message: String,
}

/// Report from a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Token paths filled, in grouping order
    pub created: Vec<CreatedToken>,
    /// Token paths removed, in grouping order
    pub deleted: Vec<DeletedToken>,
    /// Isolated failures; the corresponding trees are left unchanged
    pub failures: Vec<SyncFailure>,
    /// Token paths not processed because of the retrieval limit
    pub skipped: Vec<TokenPath>,
}

impl SyncReport {
    /// Whether every attempted change was applied.
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether the run changed no tree at all.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.deleted.is_empty()
    }
}
