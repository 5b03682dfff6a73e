//! Built-in Swagger 2.0 ruleset.
//!
//! Only version 2.0 documents ship with a bundled ruleset; other versions are
//! expected to arrive through [`RulesetRegistry::register`] or the
//! external-schema path.
//!
//! [`RulesetRegistry::register`]: super::RulesetRegistry::register

use super::types::{RequiredIf, Ruleset, ValidationRule, ValueKind};
use serde_json::json;

pub fn ruleset() -> Ruleset {
    Ruleset {
        version: "2.0".to_string(),
        rules: vec![
            ValidationRule::new("swagger")
                .required()
                .matches(json!("2.0"))
                .error("The 'swagger' key must exist at the root of the JSON and only version 2.0 is accepted."),
            ValidationRule::new("info")
                .required()
                .is_type(ValueKind::Object)
                .error("The 'info' key must exist at the root of the JSON and be an object."),
            ValidationRule::new("info.title")
                .required()
                .is_type(ValueKind::String)
                .error("The 'info.title' is missing or is invalid."),
            ValidationRule::new("info.version")
                .required()
                .is_type(ValueKind::String)
                .error("The 'info.version' is missing or is invalid."),
            ValidationRule::new("info.description")
                .is_type(ValueKind::String)
                .error("The 'info.description' is invalid. It must be a string."),
            ValidationRule::new("info.termsOfService")
                .is_type(ValueKind::String)
                .error("The 'info.termsOfService' is invalid. It must be a string."),
            // Presence bookkeeping for the contact block; the name rule below
            // hinges on this outcome.
            ValidationRule::new("info.contact")
                .error("The 'info.contact' object is invalid."),
            ValidationRule::new("info.contact.name")
                .is_type(ValueKind::String)
                .required_if(RequiredIf::exists("info.contact"))
                .error("The 'info.contact.name' value is invalid. It must be a string."),
            ValidationRule::new("info.contact.url")
                .is_type(ValueKind::Url)
                .error("The 'info.contact.url' value is invalid. It must be a complete URL."),
            ValidationRule::new("info.contact.email")
                .error("The 'info.contact.email' value is invalid. It must be a valid email."),
            ValidationRule::new("info.license")
                .is_type(ValueKind::Object)
                .error("The 'info.license' object is invalid."),
            ValidationRule::new("info.license.name")
                .is_type(ValueKind::String)
                .required_if(RequiredIf::exists("info.license"))
                .error("The 'info.license.name' value is invalid. It must be a string."),
            ValidationRule::new("info.license.url")
                .is_type(ValueKind::Url)
                .error("The 'info.license.url' value is invalid. It must be a complete URL."),
            ValidationRule::new("paths")
                .required()
                .is_type(ValueKind::Object)
                .error("The 'paths' key must exist at the root of the JSON and be an object."),
        ],
    }
}
