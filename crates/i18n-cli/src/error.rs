//! Error types for i18n-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from i18n-core
    #[error(transparent)]
    Core(#[from] i18n_core::Error),

    /// Error from i18n-fs
    #[error(transparent)]
    Fs(#[from] i18n_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// `status --fail-on-changes` found work to do
    #[error("{count} token path(s) require changes")]
    ChangesRequired { count: usize },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
