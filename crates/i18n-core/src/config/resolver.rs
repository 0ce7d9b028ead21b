//! Configuration resolution with local overrides
//!
//! The `ConfigResolver` loads a project configuration file, merges its
//! git-ignored local override, and validates the result.

use std::collections::HashSet;
use std::path::Path;

use i18n_fs::{NormalizedPath, config};
use super::manifest::{Manifest, ProviderSettings};
use crate::format::FileFormat;
use crate::model::Language;
use crate::sync::SyncOptions;
use crate::{Error, Result};

/// Configuration file names probed by [`ConfigResolver::discover`], in order
pub const CONFIG_FILE_NAMES: [&str; 4] = ["i18n.toml", "i18n.json", "i18n.yaml", "i18n.yml"];

/// The effective configuration after merging and validation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Directory holding the configuration file
    ///
    /// Provider commands run here, so relative script paths in `args`
    /// resolve the same way `folder` does.
    pub config_dir: NormalizedPath,

    /// Translation folder, absolute or relative to the working directory
    pub folder: NormalizedPath,

    pub source_language: Language,

    pub target_languages: Vec<Language>,

    pub format: FileFormat,

    pub sync: SyncOptions,

    /// `None` when no provider is configured; `status` still works
    pub provider: Option<ProviderSettings>,
}

impl ResolvedConfig {
    /// Validate language codes and sync limits
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when a language code is empty,
    /// a target is listed twice, the source language is also a target,
    /// or `max_concurrency` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.source_language.code.trim().is_empty() {
            return Err(invalid("source language code is empty"));
        }

        let mut seen = HashSet::new();
        for language in &self.target_languages {
            if language.code.trim().is_empty() {
                return Err(invalid("target language code is empty"));
            }
            if language.code == self.source_language.code {
                return Err(invalid(format!(
                    "source language `{}` is also listed as a target",
                    language.code
                )));
            }
            if !seen.insert(language.code.as_str()) {
                return Err(invalid(format!(
                    "target language `{}` is listed more than once",
                    language.code
                )));
            }
        }

        if self.sync.max_concurrency == Some(0) {
            return Err(invalid("max_concurrency must be at least 1"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig {
        message: message.into(),
    }
}

/// Resolves a configuration file and its local override
///
/// Given `i18n.toml`, the resolver also merges `i18n.local.toml` from the
/// same directory when present. Values set in the local file win.
#[derive(Debug)]
pub struct ConfigResolver {
    config_path: NormalizedPath,
}

impl ConfigResolver {
    /// Create a resolver for an explicit configuration file
    pub fn new(config_path: impl Into<NormalizedPath>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Find the configuration file in `dir`
    ///
    /// Probes [`CONFIG_FILE_NAMES`] in order and falls back to `i18n.toml`
    /// when none exists, so that [`resolve`](Self::resolve) reports the
    /// conventional location.
    pub fn discover(dir: impl Into<NormalizedPath>) -> Self {
        let dir = dir.into();
        let config_path = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(NormalizedPath::is_file)
            .unwrap_or_else(|| dir.join(CONFIG_FILE_NAMES[0]));
        Self::new(config_path)
    }

    /// Path of the main configuration file
    pub fn config_path(&self) -> &NormalizedPath {
        &self.config_path
    }

    /// Check whether the main configuration file exists
    pub fn has_config(&self) -> bool {
        self.config_path.is_file()
    }

    /// Path of the local override, `i18n.local.<ext>` next to the main file
    pub fn local_config_path(&self) -> Option<NormalizedPath> {
        let file_name = self.config_path.file_name()?;
        let (stem, extension) = file_name.rsplit_once('.')?;
        let local_name = format!("{stem}.local.{extension}");
        Some(match self.config_path.parent() {
            Some(parent) => parent.join(&local_name),
            None => NormalizedPath::new(local_name),
        })
    }

    /// Load, merge and validate the configuration
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] when the main file is missing
    /// - [`Error::Fs`] when a file cannot be read or parsed
    /// - [`Error::InvalidConfig`] when the merged values are unusable
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        if !self.has_config() {
            return Err(Error::ConfigNotFound {
                path: self.config_path.to_native(),
            });
        }

        tracing::debug!(path = %self.config_path, "Loading configuration");
        let mut manifest: Manifest = config::load(&self.config_path)?;

        if let Some(local_path) = self.local_config_path()
            && let Some(local) = config::load_optional::<Manifest>(&local_path)?
        {
            tracing::debug!(path = %local_path, "Merged local configuration override");
            manifest.merge(&local);
        }

        self.finish(manifest)
    }

    fn finish(&self, manifest: Manifest) -> Result<ResolvedConfig> {
        let source_language = manifest
            .source_language
            .ok_or_else(|| invalid("missing [source_language] section"))?;

        let base_dir = self
            .config_path
            .parent()
            .unwrap_or_else(|| NormalizedPath::new(""));
        let config_dir = if base_dir.as_str().is_empty() {
            NormalizedPath::new(".")
        } else {
            base_dir.clone()
        };
        let folder = match manifest.folder.as_deref() {
            Some(folder) if Path::new(folder).is_absolute() => NormalizedPath::new(folder),
            Some(folder) => base_dir.join(folder),
            None => config_dir.clone(),
        };

        let defaults = FileFormat::default();
        let format = FileFormat {
            indent: manifest.format.indent.unwrap_or(defaults.indent),
            trailing_newline: manifest
                .format
                .trailing_newline
                .unwrap_or(defaults.trailing_newline),
        };

        let config = ResolvedConfig {
            config_dir,
            folder,
            source_language,
            target_languages: manifest.target_languages,
            format,
            sync: SyncOptions {
                limit_retrieve: manifest.sync.limit_retrieve,
                max_concurrency: manifest.sync.max_concurrency,
            },
            provider: manifest.provider,
        };
        config.validate()?;
        Ok(config)
    }
}
