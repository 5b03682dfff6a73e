//! Tag/Path normalization: the post-validation pass that derives a
//! document's tag list and reorganizes its `paths` map into query-friendly
//! groupings.

mod groups;
mod tags;

pub use groups::*;
pub use tags::*;

use serde::Serialize;
use serde_json::{Map, Value};

/// Derived view over a validated document.
#[derive(Debug, Clone, Serialize)]
pub struct Normalized {
    pub tags: Vec<String>,
    pub paths: PathGroup,
}

/// Derive the tag list, then regroup `paths` under `grouping`.
///
/// Re-running over the same document and grouping yields a structurally equal
/// result.
pub fn normalize(document: &Value, grouping: PathGrouping) -> Normalized {
    let tags = derive_tags(document);
    let empty = Map::new();
    let paths = document
        .get("paths")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let paths = group_paths(paths, grouping, &tags);
    Normalized { tags, paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_is_idempotent() {
        let doc = json!({
            "paths": {
                "/a": {"get": {"tags": ["x", "y"]}},
                "/b": {"post": {}}
            }
        });
        let first = normalize(&doc, PathGrouping::Tag);
        let second = normalize(&doc, PathGrouping::Tag);
        assert_eq!(first.tags, second.tags);
        assert_eq!(first.paths, second.paths);
    }

    #[test]
    fn test_normalize_without_paths_key() {
        let normalized = normalize(&json!({"swagger": "2.0"}), PathGrouping::Route);
        assert!(normalized.tags.is_empty());
        assert!(normalized.paths.is_empty());
    }
}
