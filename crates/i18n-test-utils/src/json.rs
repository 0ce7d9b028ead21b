//! Inspection helpers for translation JSON.

use serde_json::Value;

/// Look up a dotted token path in a parsed translation file.
///
/// Returns `None` if any segment is missing or the leaf is not a string.
pub fn token_at<'a>(root: &'a Value, token_path: &str) -> Option<&'a str> {
    token_path
        .split('.')
        .try_fold(root, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

/// Collect every dotted token path of a parsed translation file, sorted.
pub fn token_paths(root: &Value) -> Vec<String> {
    fn walk(node: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = node {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match child {
                    Value::Object(_) => walk(child, &path, out),
                    _ => out.push(path),
                }
            }
        }
    }

    let mut out = Vec::new();
    walk(root, "", &mut out);
    out.sort();
    out
}
