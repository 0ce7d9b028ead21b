//! Translation folder loading and persistence
//!
//! A folder holds one `{code}.json` file per language:
//!
//! ```text
//! locales/
//! ├── en.json   (source)
//! ├── fr.json
//! └── es.json
//! ```
//!
//! Files are loaded fresh for every run, mutated in memory, and written back
//! at the end of a sync. Status runs discard them.

use futures::future::try_join_all;
use indexmap::IndexMap;
use i18n_fs::{NormalizedPath, io};

use crate::format::{FileFormat, stringify};
use crate::model::{Language, LanguageCode, TranslationFileContent};
use crate::{Error, Result};

/// One language's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub language_code: LanguageCode,
    /// File name within the folder, e.g. `fr.json`
    pub name: String,
    pub content: TranslationFileContent,
}

/// All language files of one run.
#[derive(Debug, Clone)]
pub struct TranslationFolder {
    pub path: NormalizedPath,
    pub source_language: Language,
    pub target_languages: Vec<Language>,
    /// Files keyed by language code, source first then targets in order
    pub files: IndexMap<LanguageCode, TranslationFile>,
}

/// File name of a language's translation file.
pub fn file_name_for(code: &str) -> String {
    format!("{code}.json")
}

/// Parse the content of a translation file.
///
/// # Errors
///
/// Returns [`Error::FileFormat`] if `data` is not a JSON object whose leaves
/// are all strings.
pub fn parse_translation_file(file_name: &str, data: &str) -> Result<TranslationFileContent> {
    serde_json::from_str(data).map_err(|e| Error::FileFormat {
        file_name: file_name.to_string(),
        message: e.to_string(),
    })
}

impl TranslationFolder {
    /// Build a folder from already loaded files.
    pub fn new(
        path: NormalizedPath,
        source_language: Language,
        target_languages: Vec<Language>,
        files: impl IntoIterator<Item = TranslationFile>,
    ) -> Self {
        let files = files
            .into_iter()
            .map(|file| (file.language_code.clone(), file))
            .collect();
        Self {
            path,
            source_language,
            target_languages,
            files,
        }
    }

    /// Load the source and every target file from `path`, concurrently.
    ///
    /// # Errors
    ///
    /// - [`Error::FilePath`] if a file cannot be read
    /// - [`Error::FileFormat`] if a file is not a valid translation tree
    pub async fn load(
        path: NormalizedPath,
        source_language: Language,
        target_languages: Vec<Language>,
    ) -> Result<Self> {
        let loads = std::iter::once(&source_language)
            .chain(&target_languages)
            .map(|language| load_file(&path, language));
        let files = try_join_all(loads).await?;

        tracing::debug!(folder = %path, files = files.len(), "loaded translation folder");
        Ok(Self::new(path, source_language, target_languages, files))
    }

    /// The loaded file of `code`.
    pub fn file(&self, code: &str) -> Result<&TranslationFile> {
        self.files.get(code).ok_or_else(|| Error::FileNotFound {
            code: code.to_string(),
        })
    }

    /// The loaded file of `code`, mutably.
    pub fn file_mut(&mut self, code: &str) -> Result<&mut TranslationFile> {
        self.files.get_mut(code).ok_or_else(|| Error::FileNotFound {
            code: code.to_string(),
        })
    }

    /// Write every loaded file back to the folder, concurrently.
    pub async fn persist(&self, format: &FileFormat) -> Result<()> {
        let writes = self.files.values().map(|file| {
            let target = self.path.join(&file.name);
            let rendered = stringify(&file.content, format);
            async move {
                let rendered = rendered?;
                tokio::task::spawn_blocking(move || io::write_text(&target, &rendered))
                    .await
                    .map_err(Error::task)??;
                Ok::<_, Error>(())
            }
        });
        try_join_all(writes).await?;

        tracing::debug!(folder = %self.path, files = self.files.len(), "persisted translation folder");
        Ok(())
    }
}

async fn load_file(folder: &NormalizedPath, language: &Language) -> Result<TranslationFile> {
    let name = file_name_for(&language.code);
    let file_path = folder.join(&name);

    let data = tokio::task::spawn_blocking(move || io::read_text(&file_path))
        .await
        .map_err(Error::task)?
        .map_err(|source| Error::FilePath {
            file_name: name.clone(),
            source,
        })?;
    let content = parse_translation_file(&name, &data)?;

    Ok(TranslationFile {
        language_code: language.code.clone(),
        name,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_translation_file("en.json", r#"["hello"]"#).unwrap_err();
        assert!(matches!(err, Error::FileFormat { ref file_name, .. } if file_name == "en.json"));
        assert!(err.to_string().contains("invalid format"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_translation_file("en.json", "{").is_err());
    }

    #[test]
    fn test_file_lookup_reports_missing_language() {
        let folder = TranslationFolder::new(
            NormalizedPath::new("locales"),
            Language::new("en", "English"),
            vec![Language::new("fr", "French")],
            Vec::new(),
        );
        assert!(matches!(folder.file("fr"), Err(Error::FileNotFound { ref code }) if code == "fr"));
    }

    #[test]
    fn test_file_name_for_code() {
        assert_eq!(file_name_for("pt-BR"), "pt-BR.json");
    }
}
