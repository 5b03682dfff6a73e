//! Declarative rule-based validation.
//!
//! A ruleset is an ordered list of field-level rules bound to one spec
//! version. Rulesets live in an explicit [`RulesetRegistry`] handed to the
//! caller; there is no ambient global registry. The built-in Swagger 2.0
//! ruleset ships as [`swagger2_ruleset`].

mod engine;
mod registry;
mod swagger2;
mod types;

pub use engine::*;
pub use registry::*;
pub use swagger2::ruleset as swagger2_ruleset;
pub use types::*;

use serde_json::Value;
use tracing::{error, warn};

/// Version assumed when a document declares none, and the fallback ruleset
/// for versions with no registration of their own.
pub const DEFAULT_VERSION: &str = "2.0";

/// Declared spec version of a document (its root `swagger` field), defaulting
/// to [`DEFAULT_VERSION`] when absent or not a string.
pub fn declared_version(document: &Value) -> &str {
    document
        .get("swagger")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_VERSION)
}

/// Select the ruleset for the document's declared version and evaluate it.
///
/// A version with no registration of its own is evaluated against the
/// [`DEFAULT_VERSION`] ruleset, which flags the version mismatch itself; the
/// document is never silently treated as valid. Only when the registry lacks
/// the default ruleset too does validation surface a hard
/// [`UnsupportedVersion`].
pub fn validate(
    document: &Value,
    registry: &RulesetRegistry,
) -> Result<RuleReport, UnsupportedVersion> {
    let version = declared_version(document);
    let ruleset = match registry.get(version) {
        Some(ruleset) => ruleset,
        None => {
            warn!(
                version = %version,
                fallback = DEFAULT_VERSION,
                "no ruleset registered for declared version"
            );
            registry.get(DEFAULT_VERSION).ok_or_else(|| {
                error!(version = %version, "failed to load validation rules");
                UnsupportedVersion {
                    version: version.to_string(),
                }
            })?
        }
    };
    let report = evaluate(document, ruleset);
    for violation in &report.errors {
        error!(error = %violation, "rule violation");
    }
    Ok(report)
}
