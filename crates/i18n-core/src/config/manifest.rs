//! Manifest parsing for i18n.toml files
//!
//! The manifest represents a single configuration file. The base file and
//! its local override are merged into a resolved configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Language;
use crate::Result;

/// How missing tokens are produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProviderSettings {
    /// Run an external command speaking JSON over stdin/stdout
    Command {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        env: BTreeMap<String, String>,
    },
    /// Copy the source-language token into every missing language
    CopySource,
}

/// `[format]` section; unset fields fall back to the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_newline: Option<bool>,
}

/// `[sync]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_retrieve: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
}

/// Translation project configuration parsed from one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Translation folder, relative to the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<Language>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_languages: Vec<Language>,

    #[serde(default)]
    pub format: FormatSection,

    #[serde(default)]
    pub sync: SyncSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderSettings>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use i18n_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// folder = "locales"
    ///
    /// [source_language]
    /// code = "en"
    /// name = "English"
    ///
    /// [[target_languages]]
    /// code = "fr"
    /// name = "French"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.folder.as_deref(), Some("locales"));
    /// assert_eq!(manifest.target_languages[0].code, "fr");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Merge another manifest into this one
    ///
    /// `other` takes precedence for every value it sets. A non-empty
    /// `target_languages` list replaces the base list entirely.
    pub fn merge(&mut self, other: &Manifest) {
        if other.folder.is_some() {
            self.folder.clone_from(&other.folder);
        }
        if other.source_language.is_some() {
            self.source_language.clone_from(&other.source_language);
        }
        if !other.target_languages.is_empty() {
            self.target_languages.clone_from(&other.target_languages);
        }
        if other.format.indent.is_some() {
            self.format.indent.clone_from(&other.format.indent);
        }
        if other.format.trailing_newline.is_some() {
            self.format.trailing_newline = other.format.trailing_newline;
        }
        if other.sync.limit_retrieve.is_some() {
            self.sync.limit_retrieve = other.sync.limit_retrieve;
        }
        if other.sync.max_concurrency.is_some() {
            self.sync.max_concurrency = other.sync.max_concurrency;
        }
        if other.provider.is_some() {
            self.provider.clone_from(&other.provider);
        }
    }
}
