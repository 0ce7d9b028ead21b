//! Provider that copies the source-language token

use async_trait::async_trait;
use i18n_core::{RetrieveRequest, Result, TokenProvider, TranslationTokens};

/// Fills every required language with the source-language token.
///
/// Useful to bootstrap a new language or to keep placeholder values until
/// a translator takes over. No external service is involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopySourceProvider;

impl CopySourceProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TokenProvider for CopySourceProvider {
    fn id(&self) -> &str {
        "copy-source"
    }

    async fn retrieve(&self, request: RetrieveRequest<'_>) -> Result<TranslationTokens> {
        let Some(source) = request.up_to_date_tokens.get(&request.source_language.code) else {
            return Err(i18n_core::Error::ProviderFailed {
                token_path: request.token_path.to_string(),
                message: format!("no {} token to copy", request.source_language.code),
            });
        };

        Ok(request
            .required_target_languages
            .iter()
            .map(|language| (language.code.clone(), source.clone()))
            .collect())
    }
}
