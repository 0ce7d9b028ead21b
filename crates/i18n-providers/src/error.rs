//! Error types for i18n-providers

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command `{command}` exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Invalid response from `{command}`: {message}")]
    InvalidResponse { command: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Convert into the core error reported for `token_path`.
    pub fn into_core(self, token_path: &str) -> i18n_core::Error {
        i18n_core::Error::ProviderFailed {
            token_path: token_path.to_string(),
            message: self.to_string(),
        }
    }
}
