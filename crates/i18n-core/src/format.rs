//! Deterministic stringification of translation files
//!
//! Keys are sorted alphabetically at every nesting level so that files
//! written by a sync run produce minimal, reviewable diffs.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::model::{Category, Node};
use crate::Result;

fn default_indent() -> String {
    "\t".to_string()
}

/// Layout options for written translation files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFormat {
    /// Indentation unit, one tab by default
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Append a newline after the closing brace
    #[serde(default)]
    pub trailing_newline: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            trailing_newline: false,
        }
    }
}

/// Serializes a category with its keys in sorted order.
struct Sorted<'a>(&'a Category);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, node) in entries {
            match node {
                Node::Token(token) => map.serialize_entry(key, token)?,
                Node::Category(category) => map.serialize_entry(key, &Sorted(category))?,
            }
        }
        map.end()
    }
}

/// Render `content` as JSON with sorted keys using `format`.
pub fn stringify(content: &Category, format: &FileFormat) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(format.indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    Sorted(content).serialize(&mut serializer)?;

    // serde_json only emits UTF-8
    let mut rendered = String::from_utf8_lossy(&buffer).into_owned();
    if format.trailing_newline {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> Category {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_stringify_sorts_keys_at_every_level() {
        let content = tree(r#"{"b": "2", "a": {"z": "26", "c": "3"}, "empty": {}}"#);
        let format = FileFormat {
            indent: "  ".to_string(),
            trailing_newline: false,
        };

        let rendered = stringify(&content, &format).unwrap();

        insta::assert_snapshot!(rendered, @r###"
        {
          "a": {
            "c": "3",
            "z": "26"
          },
          "b": "2",
          "empty": {}
        }
        "###);
    }

    #[test]
    fn test_stringify_defaults_to_tab_indent() {
        let rendered = stringify(&tree(r#"{"b": "2", "a": {"c": "3"}}"#), &FileFormat::default()).unwrap();
        assert_eq!(rendered, "{\n\t\"a\": {\n\t\t\"c\": \"3\"\n\t},\n\t\"b\": \"2\"\n}");
    }

    #[test]
    fn test_stringify_custom_indent_and_trailing_newline() {
        let format = FileFormat {
            indent: "  ".to_string(),
            trailing_newline: true,
        };

        let rendered = stringify(&tree(r#"{"hello": "Hello"}"#), &format).unwrap();

        assert_eq!(rendered, "{\n  \"hello\": \"Hello\"\n}\n");
    }

    #[test]
    fn test_stringify_empty_tree() {
        assert_eq!(stringify(&Category::new(), &FileFormat::default()).unwrap(), "{}");
    }

    #[test]
    fn test_stringify_keeps_unicode_unescaped() {
        let rendered = stringify(&tree(r#"{"bye": "Adiós"}"#), &FileFormat::default()).unwrap();
        assert_eq!(rendered, "{\n\t\"bye\": \"Adiós\"\n}");
    }

    #[test]
    fn test_format_deserializes_with_defaults() {
        let format: FileFormat = toml::from_str("trailing_newline = true").unwrap();
        assert_eq!(format.indent, "\t");
        assert!(format.trailing_newline);
    }
}
