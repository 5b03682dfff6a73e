use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Grouping modes for the `paths` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathGrouping {
    /// One entry per route, the route's full operation map as the value.
    Route,
    /// Fixed HTTP-method buckets mapping route to that route's operation.
    Method,
    /// One entry per tag, fanned out across each operation's tags.
    #[default]
    Tag,
}

/// The buckets `Method` grouping recognizes; anything else is dropped.
pub const METHOD_BUCKETS: [&str; 7] =
    ["get", "put", "post", "delete", "options", "head", "patch"];

/// Reserved group for operations that declare no tags.
pub const UNTAGGED: &str = "untagged";

/// Mapping from group key (route, method, or tag) to the operations that
/// belong to it.
pub type PathGroup = Map<String, Value>;

/// Reorganize `paths` according to `grouping`.
///
/// `tags` seeds the tag buckets, so declared-but-unused tags still appear as
/// empty groups.
pub fn group_paths(paths: &Map<String, Value>, grouping: PathGrouping, tags: &[String]) -> PathGroup {
    match grouping {
        PathGrouping::Route => by_route(paths),
        PathGrouping::Method => by_method(paths),
        PathGrouping::Tag => by_tag(paths, tags),
    }
}

fn by_route(paths: &Map<String, Value>) -> PathGroup {
    // Identity regrouping.
    paths.clone()
}

fn by_method(paths: &Map<String, Value>) -> PathGroup {
    let mut group = PathGroup::new();
    for bucket in METHOD_BUCKETS {
        group.insert(bucket.to_string(), Value::Object(Map::new()));
    }
    for (route, path) in paths {
        let Some(operations) = path.as_object() else {
            continue;
        };
        for (method, details) in operations {
            // Keys outside the fixed bucket set (path-level `parameters`,
            // vendor extensions, unknown verbs) are dropped.
            if let Some(Value::Object(bucket)) = group.get_mut(method.as_str()) {
                bucket.insert(route.clone(), details.clone());
            }
        }
    }
    group
}

fn by_tag(paths: &Map<String, Value>, tags: &[String]) -> PathGroup {
    let mut group = PathGroup::new();
    for tag in tags {
        group.insert(tag.clone(), Value::Object(Map::new()));
    }
    group.insert(UNTAGGED.to_string(), Value::Object(Map::new()));
    for (route, path) in paths {
        let Some(operations) = path.as_object() else {
            continue;
        };
        for details in operations.values() {
            let operation_tags: Vec<String> = match details.get("tags").and_then(Value::as_array) {
                Some(list) if !list.is_empty() => list
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect(),
                _ => vec![UNTAGGED.to_string()],
            };
            // Intentional fan-out: an operation with N tags lands in N groups.
            for tag in operation_tags {
                let bucket = group
                    .entry(tag)
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(bucket) = bucket {
                    bucket.insert(route.clone(), details.clone());
                }
            }
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths_fixture() -> Map<String, Value> {
        json!({
            "/a": {"get": {"tags": ["x"]}},
            "/b": {"post": {}}
        })
        .as_object()
        .cloned()
        .unwrap_or_default()
    }

    #[test]
    fn test_by_route_round_trips() {
        let paths = paths_fixture();
        let grouped = group_paths(&paths, PathGrouping::Route, &[]);
        assert_eq!(Value::Object(grouped), Value::Object(paths));
    }

    #[test]
    fn test_by_method_fixed_buckets() {
        let grouped = group_paths(&paths_fixture(), PathGrouping::Method, &[]);
        assert_eq!(grouped.len(), METHOD_BUCKETS.len());
        assert_eq!(grouped["get"]["/a"], json!({"tags": ["x"]}));
        assert_eq!(grouped["post"]["/b"], json!({}));
        assert_eq!(grouped["put"], json!({}));
        assert_eq!(grouped["delete"], json!({}));
    }

    #[test]
    fn test_by_method_drops_unknown_keys() {
        let paths = json!({
            "/a": {"trace": {}, "parameters": [], "x-internal": true, "get": {}}
        })
        .as_object()
        .cloned()
        .unwrap_or_default();
        let grouped = group_paths(&paths, PathGrouping::Method, &[]);
        assert_eq!(grouped["get"]["/a"], json!({}));
        assert!(grouped.get("trace").is_none());
        assert!(grouped.get("parameters").is_none());
    }

    #[test]
    fn test_by_tag_fan_out() {
        let paths = json!({
            "/multi": {"get": {"tags": ["a", "b"]}}
        })
        .as_object()
        .cloned()
        .unwrap_or_default();
        let grouped = group_paths(&paths, PathGrouping::Tag, &[]);
        assert_eq!(grouped["a"]["/multi"], json!({"tags": ["a", "b"]}));
        assert_eq!(grouped["b"]["/multi"], json!({"tags": ["a", "b"]}));
        assert_eq!(grouped[UNTAGGED], json!({}));
    }

    #[test]
    fn test_by_tag_untagged_fallback() {
        let grouped = group_paths(&paths_fixture(), PathGrouping::Tag, &["x".to_string()]);
        assert_eq!(grouped["x"]["/a"], json!({"tags": ["x"]}));
        assert_eq!(grouped[UNTAGGED]["/b"], json!({}));
    }

    #[test]
    fn test_by_tag_empty_tag_list_is_untagged() {
        let paths = json!({"/a": {"get": {"tags": []}}})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let grouped = group_paths(&paths, PathGrouping::Tag, &[]);
        assert_eq!(grouped[UNTAGGED]["/a"], json!({"tags": []}));
    }

    #[test]
    fn test_by_tag_seeds_declared_tags() {
        let grouped = group_paths(
            &Map::new(),
            PathGrouping::Tag,
            &["declared".to_string()],
        );
        assert_eq!(grouped["declared"], json!({}));
        assert_eq!(grouped[UNTAGGED], json!({}));
    }
}
