use serde_json::Value;

/// Collect string entries of every `key` array in the tree, deduplicated
/// across the whole result in order of first occurrence.
///
/// This is the full-tree-deduplicating collector; a per-leaf variant would
/// let duplicates from sibling subtrees through.
pub fn values_by_key(tree: &Value, key: &str) -> Vec<String> {
    let mut results = Vec::new();
    collect(tree, key, &mut results);
    results
}

fn collect(tree: &Value, key: &str, results: &mut Vec<String>) {
    match tree {
        Value::Object(map) => {
            if let Some(Value::Array(values)) = map.get(key) {
                for value in values {
                    if let Some(s) = value.as_str() {
                        if !results.iter().any(|seen| seen == s) {
                            results.push(s.to_string());
                        }
                    }
                }
            }
            for (name, child) in map {
                if name != key {
                    collect(child, key, results);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, key, results);
            }
        }
        _ => {}
    }
}

/// Derive the document's tag list.
///
/// A non-empty root `tags` array wins: its `name` fields are taken in order
/// of first occurrence, deduplicated. Otherwise tags are inferred by scanning
/// the `paths` subtree for operation-level `tags` arrays.
pub fn derive_tags(document: &Value) -> Vec<String> {
    if let Some(Value::Array(declared)) = document.get("tags") {
        let mut names = Vec::new();
        for tag in declared {
            if let Some(name) = tag.get("name").and_then(Value::as_str) {
                if !names.iter().any(|seen| seen == name) {
                    names.push(name.to_string());
                }
            }
        }
        if !names.is_empty() {
            return names;
        }
    }
    match document.get("paths") {
        Some(paths) => values_by_key(paths, "tags"),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_tags_win() {
        let doc = json!({
            "tags": [{"name": "pets"}, {"name": "users"}, {"name": "pets"}],
            "paths": {"/a": {"get": {"tags": ["other"]}}}
        });
        assert_eq!(derive_tags(&doc), vec!["pets", "users"]);
    }

    #[test]
    fn test_empty_declared_tags_fall_back_to_scan() {
        let doc = json!({
            "tags": [],
            "paths": {"/a": {"get": {"tags": ["pets"]}}}
        });
        assert_eq!(derive_tags(&doc), vec!["pets"]);
    }

    #[test]
    fn test_full_tree_deduplication() {
        let doc = json!({
            "paths": {
                "/a": {"get": {"tags": ["x", "y"]}, "post": {"tags": ["y"]}},
                "/b": {"get": {"tags": ["x", "z"]}}
            }
        });
        // Duplicates across sibling routes collapse; first occurrence wins.
        assert_eq!(derive_tags(&doc), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_deeply_nested_tags_are_found() {
        let tree = json!({
            "/a": {"get": {"responses": {"200": {"x-meta": {"tags": ["deep"]}}}}}
        });
        assert_eq!(values_by_key(&tree, "tags"), vec!["deep"]);
    }

    #[test]
    fn test_no_tags_anywhere() {
        assert_eq!(derive_tags(&json!({"paths": {"/a": {"get": {}}}})), Vec::<String>::new());
        assert_eq!(derive_tags(&json!({})), Vec::<String>::new());
    }
}
