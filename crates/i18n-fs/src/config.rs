//! Reading project configuration files
//!
//! A project is configured by `i18n.toml`, `i18n.json` or `i18n.yaml`; the
//! format follows the extension. Files are only ever read, never written.

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from the extension of `path`, case-insensitively.
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Load a configuration file, detecting its format from the extension.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] for an unknown extension
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::ConfigParse`] if the content does not match `T`
pub fn load<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let format = ConfigFormat::from_path(path)?;
    let content = io::read_text(path)?;
    parse(path, format, &content)
}

/// Like [`load`], but a missing file yields `Ok(None)`.
///
/// Used for optional override files such as `i18n.local.toml`.
pub fn load_optional<T: DeserializeOwned>(path: &NormalizedPath) -> Result<Option<T>> {
    let format = ConfigFormat::from_path(path)?;
    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    parse(path, format, &content).map(Some)
}

fn parse<T: DeserializeOwned>(path: &NormalizedPath, format: ConfigFormat, content: &str) -> Result<T> {
    format.parse(content).map_err(|message| Error::ConfigParse {
        path: path.to_native(),
        format: format.name().into(),
        message,
    })
}
