//! Tree flattening
//!
//! Walks a translation tree depth-first and maps every token to its dotted
//! path. Order follows the tree's own key order with nested categories
//! expanded in place.

use indexmap::IndexMap;

use crate::model::{Category, Node, Token, TokenPath};

/// Flat view of a tree: dotted path to borrowed token.
pub type FlatTokens<'a> = IndexMap<TokenPath, &'a Token>;

/// Flatten `tree` into an ordered mapping from token path to token.
///
/// # Example
///
/// ```
/// use i18n_core::{Category, flatten::flatten};
///
/// let tree: Category = serde_json::from_str(
///     r#"{"greeting": "Hello", "nested": {"morning": "Good morning"}}"#,
/// ).unwrap();
///
/// let flat = flatten(&tree);
/// assert_eq!(flat["greeting"], "Hello");
/// assert_eq!(flat["nested.morning"], "Good morning");
/// ```
pub fn flatten(tree: &Category) -> FlatTokens<'_> {
    let mut tokens = FlatTokens::new();
    collect(tree, None, &mut tokens);
    tokens
}

fn collect<'a>(category: &'a Category, prefix: Option<&str>, tokens: &mut FlatTokens<'a>) {
    for (key, node) in category {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };

        match node {
            Node::Token(token) => {
                tokens.insert(path, token);
            }
            Node::Category(child) => collect(child, Some(&path), tokens),
        }
    }
}
