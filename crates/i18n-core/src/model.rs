//! Translation data model
//!
//! A translation file is a tree: every node is either a [`Token`] (a leaf
//! string) or a [`Category`] (a further level of nesting). Categories keep
//! their key order so that diffs and provider calls follow the file's own
//! layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of a language, used as map key and file-name stem.
pub type LanguageCode = String;

/// A single translatable string value.
pub type Token = String;

/// Dot-separated address of a token, e.g. `"home.header.title"`.
pub type TokenPath = String;

/// One level of nesting in a translation tree.
pub type Category = IndexMap<String, Node>;

/// The root category of one language's file.
pub type TranslationFileContent = Category;

/// Token values keyed by language code.
pub type TranslationTokens = BTreeMap<LanguageCode, Token>;

/// A language taking part in synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Stable identifier, e.g. `"fr"`
    pub code: LanguageCode,
    /// Display name, e.g. `"French"`
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A position in a translation tree.
///
/// Deserialization rejects anything that is not a string or an object of
/// nodes, so numbers, arrays and nulls make a file invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Token(Token),
    Category(Category),
}

impl Node {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Category(category) => Some(category),
            Self::Token(_) => None,
        }
    }
}

impl From<&str> for Node {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<String> for Node {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}
