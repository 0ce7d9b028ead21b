//! Token path resolution
//!
//! Reads, writes and removes a single token addressed by a dotted path.
//! Every segment but the last must resolve to a [`Category`]; the last one
//! addresses the [`Token`] itself.
//!
//! Removal prunes eagerly: a category left without any token anywhere in its
//! subtree is deleted from its parent, so trees never carry empty branches
//! into flattening or diffing.

use crate::model::{Category, Node, Token};
use crate::{Error, Result};

/// Separator between the segments of a token path
pub const SEPARATOR: char = '.';

/// Split a token path into its parent segments and the token key.
fn split_path(path: &str) -> Result<(Vec<&str>, &str)> {
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    let key = segments.pop().unwrap_or_default();
    if key.is_empty() {
        return Err(Error::EmptyTokenKey {
            path: path.to_string(),
        });
    }
    Ok((segments, key))
}

fn invalid_path(segment: &str, path: &str) -> Error {
    Error::InvalidPath {
        segment: segment.to_string(),
        path: path.to_string(),
    }
}

/// Read the token at `path`.
///
/// # Errors
///
/// - [`Error::EmptyTokenKey`] if the path ends with a separator
/// - [`Error::InvalidPath`] if a parent segment is missing or is a token
/// - [`Error::TokenNotFound`] if the last segment is missing or is a category
pub fn read_token<'a>(tree: &'a Category, path: &str) -> Result<&'a Token> {
    let (parents, key) = split_path(path)?;

    let mut current = tree;
    for segment in parents {
        current = match current.get(segment) {
            Some(Node::Category(category)) => category,
            _ => return Err(invalid_path(segment, path)),
        };
    }

    match current.get(key) {
        Some(Node::Token(token)) => Ok(token),
        _ => Err(Error::TokenNotFound {
            path: path.to_string(),
        }),
    }
}

/// Set the token at `path`, creating missing parent categories.
///
/// Any previous value at the final segment is overwritten.
///
/// # Errors
///
/// - [`Error::EmptyTokenKey`] if the path ends with a separator
/// - [`Error::InvalidPath`] if a parent segment already holds a token
pub fn write_token(tree: &mut Category, path: &str, token: Token) -> Result<()> {
    let (parents, key) = split_path(path)?;

    let mut current = tree;
    for segment in parents {
        let node = current
            .entry(segment.to_string())
            .or_insert_with(|| Node::Category(Category::new()));
        current = match node {
            Node::Category(category) => category,
            Node::Token(_) => return Err(invalid_path(segment, path)),
        };
    }

    current.insert(key.to_string(), Node::Token(token));
    Ok(())
}

/// Remove the token at `path` and prune ancestors left without tokens.
///
/// Pruning walks back up the path and stops at the first ancestor that
/// still holds a token somewhere in its subtree.
///
/// # Errors
///
/// - [`Error::EmptyTokenKey`] if the path ends with a separator
/// - [`Error::InvalidPath`] if a parent segment is missing or is a token,
///   or if the last segment is missing or is a category
pub fn remove_token(tree: &mut Category, path: &str) -> Result<()> {
    let (parents, key) = split_path(path)?;
    remove_in(tree, &parents, key, path)
}

fn remove_in(category: &mut Category, parents: &[&str], key: &str, path: &str) -> Result<()> {
    let Some((head, rest)) = parents.split_first() else {
        return match category.get(key) {
            Some(Node::Token(_)) => {
                category.shift_remove(key);
                Ok(())
            }
            _ => Err(invalid_path(key, path)),
        };
    };

    let child = match category.get_mut(*head) {
        Some(Node::Category(child)) => child,
        _ => return Err(invalid_path(head, path)),
    };
    remove_in(child, rest, key, path)?;

    if !category_contains_token(child) {
        category.shift_remove(*head);
    }
    Ok(())
}

/// Whether `category` holds at least one token anywhere in its subtree.
pub fn category_contains_token(category: &Category) -> bool {
    category.values().any(|node| match node {
        Node::Token(_) => true,
        Node::Category(child) => category_contains_token(child),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tree(json: &str) -> Category {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_read_nested_token() {
        let tree = tree(r#"{"home": {"header": {"title": "Home"}}}"#);
        assert_eq!(read_token(&tree, "home.header.title").unwrap(), "Home");
    }

    #[rstest]
    #[case("missing.title", "missing")]
    #[case("greeting.title", "greeting")]
    #[case("home..title", "")]
    fn test_read_invalid_parent(#[case] path: &str, #[case] segment: &str) {
        let tree = tree(r#"{"greeting": "Hello", "home": {"title": "Home"}}"#);
        match read_token(&tree, path).unwrap_err() {
            Error::InvalidPath { segment: found, .. } => assert_eq!(found, segment),
            other => panic!("expected InvalidPath, got {other:?}"),
        }
    }

    #[rstest]
    #[case("home.subtitle")]
    #[case("home")]
    #[case("absent")]
    fn test_read_token_not_found(#[case] path: &str) {
        let tree = tree(r#"{"home": {"title": "Home"}}"#);
        assert!(matches!(
            read_token(&tree, path),
            Err(Error::TokenNotFound { path: p }) if p == path
        ));
    }

    #[rstest]
    #[case("home.")]
    #[case("")]
    fn test_empty_token_key(#[case] path: &str) {
        let mut tree = tree(r#"{"home": {"title": "Home"}}"#);
        assert!(matches!(read_token(&tree, path), Err(Error::EmptyTokenKey { .. })));
        assert!(matches!(
            write_token(&mut tree, path, "x".into()),
            Err(Error::EmptyTokenKey { .. })
        ));
        assert!(matches!(remove_token(&mut tree, path), Err(Error::EmptyTokenKey { .. })));
    }

    #[test]
    fn test_write_creates_intermediate_categories() {
        let mut tree = Category::new();
        write_token(&mut tree, "a.b.c", "deep".into()).unwrap();
        assert_eq!(tree, self::tree(r#"{"a": {"b": {"c": "deep"}}}"#));
    }

    #[test]
    fn test_write_overwrites_existing_token() {
        let mut tree = tree(r#"{"greetings": {"hello": "Hello"}}"#);
        write_token(&mut tree, "greetings.hello", "Hi".into()).unwrap();
        assert_eq!(read_token(&tree, "greetings.hello").unwrap(), "Hi");
    }

    #[test]
    fn test_write_under_token_fails() {
        let mut tree = tree(r#"{"greeting": "Hello"}"#);
        let err = write_token(&mut tree, "greeting.formal", "Good day".into()).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { ref segment, .. } if segment == "greeting"));
        assert_eq!(tree, self::tree(r#"{"greeting": "Hello"}"#));
    }

    #[test]
    fn test_remove_keeps_siblings() {
        let mut tree = tree(r#"{"home": {"title": "Home", "description": "Welcome"}}"#);
        remove_token(&mut tree, "home.title").unwrap();
        assert_eq!(tree, self::tree(r#"{"home": {"description": "Welcome"}}"#));
    }

    #[test]
    fn test_remove_prunes_empty_ancestors() {
        let mut tree = tree(r#"{"a": {"b": {"c": {"d": "leaf"}}}, "z": "keep"}"#);
        remove_token(&mut tree, "a.b.c.d").unwrap();
        assert_eq!(tree, self::tree(r#"{"z": "keep"}"#));
    }

    #[test]
    fn test_remove_stops_at_ancestor_with_token() {
        let mut tree = tree(r#"{"a": {"keep": "yes", "b": {"c": {"d": "leaf"}}}}"#);
        remove_token(&mut tree, "a.b.c.d").unwrap();
        assert_eq!(tree, self::tree(r#"{"a": {"keep": "yes"}}"#));
    }

    #[test]
    fn test_remove_prunes_ancestor_holding_only_empty_categories() {
        let mut tree = tree(r#"{"a": {"empty": {}, "b": {"c": "leaf"}}, "z": "keep"}"#);
        remove_token(&mut tree, "a.b.c").unwrap();
        assert_eq!(tree, self::tree(r#"{"z": "keep"}"#));
    }

    #[test]
    fn test_remove_then_read_fails() {
        let mut tree = tree(r#"{"home": {"title": "Home"}}"#);
        remove_token(&mut tree, "home.title").unwrap();
        assert!(read_token(&tree, "home.title").is_err());
    }

    #[rstest]
    #[case("home", "home")]
    #[case("home.subtitle", "subtitle")]
    #[case("missing.title", "missing")]
    #[case("greeting.title", "greeting")]
    fn test_remove_invalid_paths(#[case] path: &str, #[case] segment: &str) {
        let original = tree(r#"{"greeting": "Hello", "home": {"title": "Home"}}"#);
        let mut tree = original.clone();
        match remove_token(&mut tree, path).unwrap_err() {
            Error::InvalidPath { segment: found, .. } => assert_eq!(found, segment),
            other => panic!("expected InvalidPath, got {other:?}"),
        }
        assert_eq!(tree, original);
    }

    #[test]
    fn test_category_contains_token() {
        assert!(category_contains_token(&tree(r#"{"key": "token"}"#)));
        assert!(category_contains_token(&tree(r#"{"a": {"b": {"c": "token"}}}"#)));
        assert!(!category_contains_token(&tree(r#"{"a": {"b": {}}}"#)));
        assert!(!category_contains_token(&Category::new()));
    }
}
