//! Error types for i18n-core

use std::path::PathBuf;

/// Result type for i18n-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in i18n-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path segment does not resolve to the node kind the operation needs
    #[error("Invalid path segment `{segment}` in token path `{path}`")]
    InvalidPath { segment: String, path: String },

    /// The final segment is absent or resolves to a category
    #[error("Token not found: {path}")]
    TokenNotFound { path: String },

    /// The token path ends with an empty segment
    #[error("Token key should not be empty: `{path}`")]
    EmptyTokenKey { path: String },

    /// A change references a language that is not a target language
    #[error("Language not found: {code}")]
    LanguageNotFound { code: String },

    /// The folder holds no file for a referenced language
    #[error("Translation file not found for language: {code}")]
    FileNotFound { code: String },

    /// The translation file could not be located or read
    #[error("Cannot load translation file {file_name}: invalid path")]
    FilePath {
        file_name: String,
        #[source]
        source: i18n_fs::Error,
    },

    /// The translation file is not a nested tree of strings
    #[error("Cannot load translation file {file_name}: invalid format ({message})")]
    FileFormat { file_name: String, message: String },

    /// The token provider failed for one token path
    #[error("Provider failed for {token_path}: {message}")]
    ProviderFailed { token_path: String, message: String },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration is present but inconsistent
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A background I/O task panicked or was cancelled
    #[error("Background task failed: {message}")]
    Task { message: String },

    // Transparent wrappers for underlying errors
    /// Filesystem error from i18n-fs
    #[error(transparent)]
    Fs(#[from] i18n_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error breaks a run-wide precondition.
    ///
    /// Fatal errors abort a sync run. The others are scoped to a single
    /// token path and are isolated by the sync engine.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EmptyTokenKey { .. }
                | Self::LanguageNotFound { .. }
                | Self::FileNotFound { .. }
                | Self::FilePath { .. }
                | Self::FileFormat { .. }
                | Self::ConfigNotFound { .. }
                | Self::InvalidConfig { .. }
                | Self::Task { .. }
        )
    }

    pub(crate) fn task(source: tokio::task::JoinError) -> Self {
        Self::Task {
            message: source.to_string(),
        }
    }
}
