use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of runtime types a rule can demand of a value.
///
/// Checks are strict against the deserialized-JSON value model, no coercion.
/// `Url` additionally requires the string to parse as an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Object,
    Array,
    Url,
}

impl ValueKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Object => value.is_object(),
            ValueKind::Array => value.is_array(),
            ValueKind::Url => value
                .as_str()
                .is_some_and(|s| url::Url::parse(s).is_ok()),
        }
    }
}

/// Condition applied to a `requiredIf` dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireCondition {
    #[default]
    Exists,
    Matches,
}

/// Dependency clause: this rule's validity hinges on the outcome of a rule
/// evaluated earlier in the same ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredIf {
    pub path: String,
    #[serde(default)]
    pub condition: RequireCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
}

impl RequiredIf {
    /// Valid only while the dependency exists and passed its own rule.
    pub fn exists(path: impl Into<String>) -> Self {
        RequiredIf {
            path: path.into(),
            condition: RequireCondition::Exists,
            expected: None,
        }
    }

    /// Valid only while the dependency passed and its raw value equals
    /// `expected`.
    pub fn matches(path: impl Into<String>, expected: Value) -> Self {
        RequiredIf {
            path: path.into(),
            condition: RequireCondition::Matches,
            expected: Some(expected),
        }
    }
}

/// One declarative field-level validation rule. Immutable at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Dotted path into the document, e.g. `info.title`.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<RequiredIf>,
    /// Literal the value must strictly equal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_type: Option<ValueKind>,
    /// Custom error text; a generated default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationRule {
    pub fn new(path: impl Into<String>) -> Self {
        ValidationRule {
            path: path.into(),
            required: None,
            required_if: None,
            matches: None,
            is_type: None,
            error: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn required_if(mut self, dependency: RequiredIf) -> Self {
        self.required_if = Some(dependency);
        self
    }

    pub fn matches(mut self, literal: Value) -> Self {
        self.matches = Some(literal);
        self
    }

    pub fn is_type(mut self, kind: ValueKind) -> Self {
        self.is_type = Some(kind);
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub(crate) fn error_text(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| format!("The path '{}' is invalid.", self.path))
    }
}

/// Per-path record of one rule evaluation. Later evaluations for the same
/// path overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub exists: bool,
    pub is_valid: bool,
    /// Outcome of the `requiredIf` clause, when one was evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<bool>,
}

/// Ordered list of rules bound to one spec version. Order matters: a rule
/// must appear after any rule it references via `requiredIf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    pub version: String,
    pub rules: Vec<ValidationRule>,
}
