//! Project context resolution
//!
//! Locates the configuration from the working directory, applies the
//! global command-line overrides and loads the translation folder.

use std::path::Path;

use i18n_core::{ConfigResolver, ResolvedConfig, TranslationFolder};
use i18n_fs::NormalizedPath;

use crate::cli::GlobalArgs;
use crate::error::{CliError, Result};

/// Configuration of the project a command runs against
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ResolvedConfig,
}

impl Context {
    /// Resolve the configuration for `cwd`.
    ///
    /// `--config` and `--folder` are interpreted relative to `cwd`.
    pub fn load(cwd: &Path, global: &GlobalArgs) -> Result<Self> {
        let resolver = match &global.config {
            Some(path) => ConfigResolver::new(cwd.join(path)),
            None => ConfigResolver::discover(cwd),
        };
        if !resolver.has_config() {
            return Err(CliError::user(format!(
                "No configuration found at {}. Create an i18n.toml or pass --config.",
                resolver.config_path()
            )));
        }

        let mut config = resolver.resolve()?;
        if let Some(folder) = &global.folder {
            config.folder = NormalizedPath::new(cwd.join(folder));
        }
        tracing::debug!(folder = %config.folder, targets = config.target_languages.len(), "resolved configuration");

        Ok(Self { config })
    }

    /// Load the source and target files of the configured folder.
    pub async fn load_folder(&self) -> Result<TranslationFolder> {
        let folder = TranslationFolder::load(
            self.config.folder.clone(),
            self.config.source_language.clone(),
            self.config.target_languages.clone(),
        )
        .await?;
        Ok(folder)
    }
}
