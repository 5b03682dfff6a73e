use super::types::Ruleset;
use std::collections::HashMap;
use std::fmt;

/// No ruleset covers the document's declared version, and the registry has
/// no default to fall back to.
///
/// Surfaced as a hard error: degrading to "no errors produced" would let an
/// unvalidated document read as valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedVersion {
    pub version: String,
}

impl fmt::Display for UnsupportedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to load validation rules for version {}",
            self.version
        )
    }
}

impl std::error::Error for UnsupportedVersion {}

/// Rulesets keyed by spec version string.
///
/// An explicit registry object handed to the engine at construction; there is
/// no process-wide registry to mutate.
#[derive(Debug, Clone, Default)]
pub struct RulesetRegistry {
    rulesets: HashMap<String, Ruleset>,
}

impl RulesetRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in Swagger 2.0 ruleset.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(super::swagger2::ruleset());
        registry
    }

    /// Add or replace the ruleset for its version.
    pub fn register(&mut self, ruleset: Ruleset) {
        self.rulesets.insert(ruleset.version.clone(), ruleset);
    }

    pub fn get(&self, version: &str) -> Option<&Ruleset> {
        self.rulesets.get(version)
    }

    /// Registered version strings, unordered.
    pub fn versions(&self) -> Vec<&str> {
        self.rulesets.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::types::ValidationRule;

    #[test]
    fn test_builtin_registers_swagger_2() {
        let registry = RulesetRegistry::builtin();
        assert!(registry.get("2.0").is_some());
        assert!(registry.get("3.0").is_none());
    }

    #[test]
    fn test_register_replaces_existing_version() {
        let mut registry = RulesetRegistry::builtin();
        let replacement = Ruleset {
            version: "2.0".to_string(),
            rules: vec![ValidationRule::new("swagger").required()],
        };
        registry.register(replacement);
        assert_eq!(registry.get("2.0").map(|s| s.rules.len()), Some(1));
        assert_eq!(registry.versions(), vec!["2.0"]);
    }
}
