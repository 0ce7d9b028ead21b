//! [`TestFolder`] builder for translation project scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::json;

/// Name of the translation folder inside the project root.
pub const LOCALES_DIR: &str = "locales";

/// A temporary project directory holding a `locales/` translation folder,
/// with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use i18n_test_utils::TestFolder;
///
/// let project = TestFolder::new()
///     .with_language("en", r#"{"x": "Hello"}"#)
///     .with_language("fr", "{}")
///     .with_config("en", &["fr"], "");
/// project.assert_token("en", "x", "Hello");
/// ```
pub struct TestFolder {
    temp_dir: TempDir,
}

impl Default for TestFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFolder {
    /// Create a temporary project with an empty `locales/` folder.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(LOCALES_DIR))
            .unwrap_or_else(|e| panic!("TestFolder::new: failed to create locales dir: {e}"));
        Self { temp_dir }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the translation folder.
    pub fn locales(&self) -> PathBuf {
        self.root().join(LOCALES_DIR)
    }

    /// Path of the translation file of `code`.
    pub fn language_path(&self, code: &str) -> PathBuf {
        self.locales().join(format!("{code}.json"))
    }

    /// Write `{code}.json` with `content` verbatim.
    pub fn with_language(self, code: &str, content: &str) -> Self {
        self.write_language(code, content);
        self
    }

    /// Write `i18n.toml` pointing at `locales/`.
    ///
    /// Language names are the upper-cased codes. `extra` is appended
    /// verbatim, e.g. a `[provider]` section.
    pub fn with_config(self, source: &str, targets: &[&str], extra: &str) -> Self {
        let mut config = format!(
            "folder = \"{LOCALES_DIR}\"\n\n[source_language]\ncode = \"{source}\"\nname = \"{}\"\n",
            source.to_uppercase()
        );
        for target in targets {
            config.push_str(&format!(
                "\n[[target_languages]]\ncode = \"{target}\"\nname = \"{}\"\n",
                target.to_uppercase()
            ));
        }
        if !extra.is_empty() {
            config.push('\n');
            config.push_str(extra);
        }
        self.write_file("i18n.toml", &config);
        self
    }

    /// Write `{code}.json` with `content` verbatim.
    pub fn write_language(&self, code: &str, content: &str) {
        let path = self.language_path(code);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    }

    /// Write `content` to `path` relative to the project root.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
    }

    /// Raw text of `{code}.json`.
    pub fn read_language(&self, code: &str) -> String {
        let path = self.language_path(code);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Parsed content of `{code}.json`.
    pub fn read_json(&self, code: &str) -> Value {
        let text = self.read_language(code);
        serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("{code}.json is not valid JSON ({e}):\n{text}"))
    }

    /// Sorted token paths of `{code}.json`.
    pub fn token_paths(&self, code: &str) -> Vec<String> {
        json::token_paths(&self.read_json(code))
    }

    /// Assert that `{code}.json` holds `expected` at `token_path`.
    ///
    /// # Panics
    /// Panics with the file content if the token differs or is missing.
    pub fn assert_token(&self, code: &str, token_path: &str, expected: &str) {
        let root = self.read_json(code);
        assert_eq!(
            json::token_at(&root, token_path),
            Some(expected),
            "Unexpected token `{token_path}` in {code}.json:\n{root:#}"
        );
    }

    /// Assert that `{code}.json` has no token at `token_path`.
    ///
    /// # Panics
    /// Panics with the file content if the token is present.
    pub fn assert_no_token(&self, code: &str, token_path: &str) {
        let root = self.read_json(code);
        assert!(
            json::token_at(&root, token_path).is_none(),
            "Expected no token `{token_path}` in {code}.json:\n{root:#}"
        );
    }

    /// Assert that `{code}.json` has exactly the token paths `expected`.
    pub fn assert_token_paths(&self, code: &str, expected: &[&str]) {
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(self.token_paths(code), expected, "Token paths of {code}.json");
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
