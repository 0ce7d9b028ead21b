//! Token providers for i18n-sync.
//!
//! This crate provides the [`TokenProvider`](i18n_core::TokenProvider)
//! implementations the CLI can be configured with.

pub mod command;
pub mod copy_source;
pub mod error;

pub use command::CommandProvider;
pub use copy_source::CopySourceProvider;
pub use error::{Error, Result};

use i18n_core::{ProviderSettings, TokenProvider};
use i18n_fs::NormalizedPath;

/// Build the provider described by the `[provider]` configuration section.
///
/// Commands run in `config_dir`, the directory of the configuration file.
pub fn from_settings(settings: &ProviderSettings, config_dir: &NormalizedPath) -> Box<dyn TokenProvider> {
    match settings {
        ProviderSettings::Command { command, args, env } => Box::new(
            CommandProvider::new(command)
                .args(args.iter().cloned())
                .envs(env.iter().map(|(key, value)| (key.clone(), value.clone())))
                .current_dir(config_dir.to_native()),
        ),
        ProviderSettings::CopySource => Box::new(CopySourceProvider::new()),
    }
}
