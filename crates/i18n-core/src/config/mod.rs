//! Configuration resolution
//!
//! A project describes its translation folder in `i18n.toml` (JSON and YAML
//! are accepted too). An optional sibling `i18n.local.toml` overrides it and
//! is meant to stay out of version control, e.g. for a provider command
//! pointing at a developer's own credentials.
//!
//! # Example
//!
//! ```toml
//! folder = "locales"
//!
//! [source_language]
//! code = "en"
//! name = "English"
//!
//! [[target_languages]]
//! code = "fr"
//! name = "French"
//!
//! [format]
//! indent = "  "
//! trailing_newline = true
//!
//! [sync]
//! limit_retrieve = 20
//!
//! [provider]
//! kind = "command"
//! command = "node"
//! args = ["scripts/translate.mjs"]
//! ```

mod manifest;
mod resolver;

pub use manifest::{FormatSection, Manifest, ProviderSettings, SyncSection};
pub use resolver::{CONFIG_FILE_NAMES, ConfigResolver, ResolvedConfig};
