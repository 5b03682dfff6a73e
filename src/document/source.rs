use serde_json::Value;
use url::Url;

/// Where a document comes from.
///
/// [`DocumentSource::detect`] classifies a bare string the way the loader
/// will treat it; hosts that already hold a parsed object hand it over with
/// [`DocumentSource::Inline`] (ownership moves into the pipeline run).
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// Remote document, fetched over HTTP.
    Url(String),
    /// Raw JSON text supplied directly by the host.
    Text(String),
    /// Already-parsed document.
    Inline(Value),
}

impl DocumentSource {
    /// Classify a string as URL-shaped or raw text.
    pub fn detect(input: &str) -> Self {
        if is_url_shaped(input) {
            DocumentSource::Url(input.trim().to_string())
        } else {
            DocumentSource::Text(input.to_string())
        }
    }
}

impl From<Value> for DocumentSource {
    fn from(value: Value) -> Self {
        DocumentSource::Inline(value)
    }
}

pub(crate) fn is_url_shaped(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// File-extension heuristic: `.yaml`/`.yml` suffix means the YAML parser,
/// anything else the JSON parser.
pub(crate) fn wants_yaml(url: &str) -> bool {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    path.ends_with(".yaml") || path.ends_with(".yml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_url_shaped() {
        assert_eq!(
            DocumentSource::detect("https://example.com/swagger.json"),
            DocumentSource::Url("https://example.com/swagger.json".to_string())
        );
        assert_eq!(
            DocumentSource::detect("{\"swagger\":\"2.0\"}"),
            DocumentSource::Text("{\"swagger\":\"2.0\"}".to_string())
        );
        // Other schemes are not fetchable, so they stay raw text.
        assert!(matches!(
            DocumentSource::detect("ftp://example.com/spec"),
            DocumentSource::Text(_)
        ));
    }

    #[test]
    fn test_inline_from_value() {
        let source: DocumentSource = json!({"swagger": "2.0"}).into();
        assert!(matches!(source, DocumentSource::Inline(_)));
    }

    #[test]
    fn test_yaml_heuristic() {
        assert!(wants_yaml("https://example.com/api/spec.yaml"));
        assert!(wants_yaml("https://example.com/api/spec.yml"));
        assert!(!wants_yaml("https://example.com/api/spec.json"));
        // Query strings do not defeat the extension check.
        assert!(wants_yaml("https://example.com/spec.yaml?raw=1"));
    }
}
