//! Provider backed by an external command
//!
//! The command receives one JSON request per token path on stdin and must
//! print a JSON object mapping language codes to tokens on stdout:
//!
//! ```text
//! stdin:  {"tokenPath": "home.title", "sourceLanguage": {"code": "en", ...}, ...}
//! stdout: {"fr": "Accueil", "es": "Inicio"}
//! ```
//!
//! A non-zero exit status or unparsable output fails the token path. The
//! command's stderr is captured into the error message.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use futures::future;
use i18n_core::{Language, RetrieveRequest, TokenPath, TokenProvider, TranslationTokens};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Request written to the command's stdin
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest<'a> {
    pub token_path: &'a str,
    pub source_language: &'a Language,
    pub up_to_date_translation_tokens: &'a TranslationTokens,
    pub required_target_languages: &'a [Language],
    pub up_to_date_target_languages: &'a [Language],
    /// Current tokens of the other paths in the same category
    pub related_translation_tokens: BTreeMap<TokenPath, TranslationTokens>,
}

/// Runs a configured command once per token path.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    id: String,
    command: String,
    args: Vec<String>,
    env: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
}

impl CommandProvider {
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            id: format!("command:{command}"),
            command,
            args: Vec::new(),
            env: Vec::new(),
            current_dir: None,
        }
    }

    /// Append arguments passed to every invocation.
    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Add environment variables set for every invocation.
    pub fn envs(mut self, env: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(env);
        self
    }

    /// Run the command from `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Spawn the command, feed it `request` and parse its answer.
    pub async fn run(&self, request: &CommandRequest<'_>) -> Result<TranslationTokens> {
        let payload = serde_json::to_vec(request)?;

        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .envs(self.env.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::CommandNotFound {
                command: self.command.clone(),
            },
            _ => Error::Io(e),
        })?;

        let stdin = child.stdin.take();
        let write = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(&payload).await {
                // The command may answer without reading its input
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                result => result,
            }
        };
        let (written, output) = future::join(write, child.wait_with_output()).await;
        let output = output?;
        written?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: self.command.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| Error::InvalidResponse {
            command: self.command.clone(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TokenProvider for CommandProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn retrieve(&self, request: RetrieveRequest<'_>) -> i18n_core::Result<TranslationTokens> {
        let related_translation_tokens = request
            .lookup
            .sibling_paths(request.token_path)
            .into_iter()
            .map(|path| {
                let tokens = request.lookup.tokens_at(&path);
                (path, tokens)
            })
            .collect();

        let command_request = CommandRequest {
            token_path: request.token_path,
            source_language: request.source_language,
            up_to_date_translation_tokens: &request.up_to_date_tokens,
            required_target_languages: request.required_target_languages,
            up_to_date_target_languages: &request.up_to_date_target_languages,
            related_translation_tokens,
        };

        tracing::debug!(command = %self.command, token_path = request.token_path, "running provider command");
        self.run(&command_request)
            .await
            .map_err(|e| e.into_core(request.token_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_uses_camel_case_keys() {
        let source = Language::new("en", "English");
        let targets = vec![Language::new("fr", "French")];
        let tokens: TranslationTokens = [("en".to_string(), "Home".to_string())].into_iter().collect();
        let request = CommandRequest {
            token_path: "home.title",
            source_language: &source,
            up_to_date_translation_tokens: &tokens,
            required_target_languages: &targets,
            up_to_date_target_languages: &[],
            related_translation_tokens: BTreeMap::new(),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "tokenPath": "home.title",
                "sourceLanguage": {"code": "en", "name": "English"},
                "upToDateTranslationTokens": {"en": "Home"},
                "requiredTargetLanguages": [{"code": "fr", "name": "French"}],
                "upToDateTargetLanguages": [],
                "relatedTranslationTokens": {}
            })
        );
    }

    #[test]
    fn test_builder_collects_args_and_env() {
        let provider = CommandProvider::new("node")
            .args(["a.mjs".to_string()])
            .envs([("KEY".to_string(), "value".to_string())]);

        assert_eq!(provider.id(), "command:node");
        assert_eq!(provider.args, vec!["a.mjs"]);
        assert_eq!(provider.env, vec![("KEY".to_string(), "value".to_string())]);
    }
}
