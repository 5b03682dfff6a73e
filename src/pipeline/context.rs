use crate::document::DocumentSource;
use crate::normalize::{PathGroup, PathGrouping};
use crate::rules::RuleOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Which validation path a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationBackend {
    /// Declarative per-version ruleset; no network beyond the document fetch.
    #[default]
    Rules,
    /// Published JSON Schema for the declared version, fetched per run.
    Schema,
}

/// Per-run options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DocSetOptions {
    pub order_paths: PathGrouping,
    pub backend: ValidationBackend,
}

/// Accumulated state of one pipeline run.
///
/// Owned exclusively by the run: each stage takes the carrier, mutates it,
/// and hands it forward. Nothing here is shared across concurrent runs.
#[derive(Debug)]
pub struct Context {
    /// Input, consumed by the load stage.
    pub source: Option<DocumentSource>,
    pub options: DocSetOptions,
    pub document: Value,
    /// Schema document fetched for the external-schema backend.
    pub schema: Option<Value>,
    /// Data-level violations, cumulative across stages.
    pub errors: Vec<String>,
    /// Per-path rule outcomes from the rules backend.
    pub results: BTreeMap<String, RuleOutcome>,
    pub tags: Vec<String>,
    pub paths: PathGroup,
}

impl Context {
    pub fn new(source: DocumentSource, options: DocSetOptions) -> Self {
        Context {
            source: Some(source),
            options,
            document: Value::Null,
            schema: None,
            errors: Vec::new(),
            results: BTreeMap::new(),
            tags: Vec::new(),
            paths: PathGroup::new(),
        }
    }
}

/// Terminal result of a successful run.
///
/// `errors` is the complete set of data-level violations found in one pass;
/// an empty list is the only success/failure distinction the contract makes.
#[derive(Debug, Clone, Serialize)]
pub struct DocSet {
    pub document: Value,
    pub tags: Vec<String>,
    pub paths: PathGroup,
    pub errors: Vec<String>,
}
