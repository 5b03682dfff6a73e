//! External-schema validation path.
//!
//! Resolves the published JSON Schema for a document's declared version and
//! adapts the `jsonschema` crate (iterating every violation rather than
//! stopping at the first) to the pipeline's error-reporting contract.

use jsonschema::validator_for;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;

/// Published schema repository for OpenAPI/Swagger spec versions.
pub const DEFAULT_SCHEMA_BASE: &str =
    "https://raw.githubusercontent.com/OAI/OpenAPI-Specification/main/schemas";

/// Display token substituted for the `#/` pointer root in surfaced messages.
const ROOT_TOKEN: &str = "{ROOT}";

static VERSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?").expect("version token pattern is valid"));

/// Failure in the external-schema path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The declared version string carries no numeric version token.
    Version { version: String },
    /// The schema document could not be fetched or parsed.
    Schema { message: String },
    /// The validation capability could not be constructed from the schema.
    /// Callers treat this as log-only: the validation result is unknown, not
    /// failed.
    ValidatorUnavailable { message: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Version { version } => {
                write!(f, "no numeric version token in '{}'", version)
            }
            SchemaError::Schema { message } => {
                write!(f, "schema document unavailable: {}", message)
            }
            SchemaError::ValidatorUnavailable { message } => {
                write!(f, "schema validator unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Deterministic schema URL for a declared version string.
///
/// Takes the leading numeric token of `version`, pads a bare major component
/// to `x.0`, and appends it to the repository base:
/// `"2.0"` becomes `<base>/v2.0/schema.json`.
pub fn schema_url(version: &str, base: &str) -> Result<String, SchemaError> {
    let token = VERSION_TOKEN
        .find(version)
        .ok_or_else(|| SchemaError::Version {
            version: version.to_string(),
        })?;
    let mut number = token.as_str().to_string();
    if !number.contains('.') {
        number.push_str(".0");
    }
    Ok(format!(
        "{}/v{}/schema.json",
        base.trim_end_matches('/'),
        number
    ))
}

/// One structural violation reported by the external validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Failing schema keyword (`required`, `type`, ...).
    pub code: String,
    pub message: String,
    /// Instance pointer with the root marker rewritten for display.
    pub pointer: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.pointer)
    }
}

fn keyword_of(schema_path: &str) -> String {
    schema_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("schema")
        .to_string()
}

fn display_pointer(instance_path: &str) -> String {
    if instance_path.is_empty() {
        format!("{}/", ROOT_TOKEN)
    } else {
        format!("{}{}", ROOT_TOKEN, instance_path)
    }
}

/// Validate `document` against a schema document, collecting every violation
/// in one pass.
///
/// A schema the capability cannot compile yields
/// [`SchemaError::ValidatorUnavailable`]; violations themselves are data, not
/// errors, and never abort anything.
pub fn validate_against_schema(
    document: &Value,
    schema: &Value,
) -> Result<Vec<SchemaViolation>, SchemaError> {
    let compiled =
        validator_for(schema).map_err(|e| SchemaError::ValidatorUnavailable {
            message: e.to_string(),
        })?;
    let violations = compiled
        .iter_errors(document)
        .map(|err| SchemaViolation {
            code: keyword_of(&err.schema_path().to_string()),
            pointer: display_pointer(&err.instance_path().to_string()),
            message: err.to_string(),
        })
        .collect();
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_url_derivation() {
        assert_eq!(
            schema_url("2.0", DEFAULT_SCHEMA_BASE).unwrap(),
            format!("{}/v2.0/schema.json", DEFAULT_SCHEMA_BASE)
        );
        // Bare major pads to x.y form.
        assert_eq!(
            schema_url("2", "https://example.com/schemas/").unwrap(),
            "https://example.com/schemas/v2.0/schema.json"
        );
        // Only the leading numeric token counts.
        assert_eq!(
            schema_url("3.0.4", "https://example.com/schemas").unwrap(),
            "https://example.com/schemas/v3.0/schema.json"
        );
        assert_eq!(
            schema_url("swagger-2.0-draft", "https://example.com/schemas").unwrap(),
            "https://example.com/schemas/v2.0/schema.json"
        );
        assert!(matches!(
            schema_url("latest", DEFAULT_SCHEMA_BASE),
            Err(SchemaError::Version { .. })
        ));
    }

    #[test]
    fn test_display_pointer_rewrites_root() {
        assert_eq!(display_pointer(""), "{ROOT}/");
        assert_eq!(display_pointer("/info/title"), "{ROOT}/info/title");
    }

    #[test]
    fn test_collects_all_violations() {
        let schema = json!({
            "type": "object",
            "required": ["swagger", "info"],
            "properties": {
                "swagger": {"type": "string"},
                "info": {"type": "object"}
            }
        });
        let document = json!({"swagger": 2});
        let violations = validate_against_schema(&document, &schema).unwrap();
        // Both the type violation and the missing-required violation surface.
        assert!(violations.len() >= 2, "{violations:?}");
        assert!(violations
            .iter()
            .any(|v| v.pointer == "{ROOT}/swagger" && v.code == "type"));
        assert!(violations.iter().any(|v| v.code == "required"));
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        let schema = json!({"type": "object", "required": ["swagger"]});
        let document = json!({"swagger": "2.0"});
        assert_eq!(validate_against_schema(&document, &schema).unwrap(), vec![]);
    }

    #[test]
    fn test_uncompilable_schema_is_unavailable() {
        let schema = json!({"type": "not_a_type"});
        let err = validate_against_schema(&json!({}), &schema).unwrap_err();
        assert!(matches!(err, SchemaError::ValidatorUnavailable { .. }));
    }
}
