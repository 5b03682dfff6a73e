use super::types::{RequireCondition, RuleOutcome, Ruleset, ValidationRule};
use serde_json::Value;
use std::collections::BTreeMap;

/// Everything one validation pass produced.
///
/// The engine is cumulative, never fail-fast: every rule in the set runs and
/// every failure lands in `errors`, so a caller learns the complete set of
/// problems in one pass. Reports are scoped to a single run and never merged
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct RuleReport {
    /// Human-readable violation messages, in ruleset order.
    pub errors: Vec<String>,
    /// Per-path outcomes, keyed by rule path.
    pub results: BTreeMap<String, RuleOutcome>,
}

/// Walk `document` along a dotted path. Absence yields `None`, never an
/// error. Numeric segments index into arrays.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Evaluate every rule in `ruleset` against `document`, in declaration order.
///
/// Order is load-bearing: `requiredIf` clauses read the outcomes of earlier
/// rules, and a dependency that has not been evaluated yet counts as missing.
pub fn evaluate(document: &Value, ruleset: &Ruleset) -> RuleReport {
    let mut report = RuleReport::default();
    for rule in &ruleset.rules {
        test_rule(document, rule, &mut report);
    }
    report
}

fn test_rule(document: &Value, rule: &ValidationRule, report: &mut RuleReport) {
    let value = resolve_path(document, &rule.path);
    let exists = value.is_some();
    let mut valid = true;
    let mut conditional = None;

    if let Some(required) = rule.required {
        valid &= required && exists;
    }

    if let Some(dependency) = &rule.required_if {
        let dependency_ok = report
            .results
            .get(&dependency.path)
            .map(|outcome| outcome.exists && outcome.is_valid)
            .unwrap_or(false);
        match dependency.condition {
            RequireCondition::Exists => {
                // Absence of our own value lifts the constraint entirely.
                if exists {
                    conditional = Some(dependency_ok);
                    valid &= dependency_ok;
                }
            }
            RequireCondition::Matches => {
                let expected = dependency.expected.clone().unwrap_or(Value::Null);
                let matched = dependency_ok
                    && resolve_path(document, &dependency.path) == Some(&expected);
                conditional = Some(matched);
                valid &= matched;
            }
        }
    }

    if let Some(value) = value {
        if let Some(literal) = &rule.matches {
            valid &= literal == value;
        }
        if let Some(kind) = rule.is_type {
            valid &= kind.matches(value);
        }
    }

    report.results.insert(
        rule.path.clone(),
        RuleOutcome {
            exists,
            is_valid: valid,
            conditional,
        },
    );
    if !valid {
        report.errors.push(rule.error_text());
    }
}
