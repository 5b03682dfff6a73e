//! # specdock
//!
//! **specdock** ingests an OpenAPI (Swagger) document (from a URL, a raw
//! JSON/YAML string, or an already-parsed value), validates it against a
//! versioned ruleset or the published JSON Schema, and reorganizes its
//! route/operation definitions into query-friendly groupings (by route, by
//! HTTP method, or by tag). It is built to be embedded in a
//! documentation-rendering front end.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`document`]** - Input normalization: URL / raw text / in-memory value
//!   to one parsed document
//! - **[`rules`]** - Declarative rule engine with a per-version ruleset
//!   registry (the offline validation path)
//! - **[`schema`]** - External-schema validation: version-derived schema URLs
//!   and a collect-all-violations adapter over the `jsonschema` crate
//! - **[`normalize`]** - Tag derivation and `paths` regrouping
//! - **[`pipeline`]** - The orchestrator: ordered async stages
//!   `Load → FetchSchema → Validate → DeriveTags` with accumulated
//!   diagnostics and lifecycle notifications
//! - **[`fetch`]** - The pluggable HTTP GET capability
//! - **[`runtime_config`]** - Environment-variable runtime configuration
//! - **[`cli`]** - The `specdock check` command
//!
//! ## Diagnostics model
//!
//! Infrastructure failures (unparseable input, failed fetches, unsupported
//! spec versions) abort a run and surface as the run's terminal error.
//! Data-level violations never abort: every rule in a ruleset runs and every
//! schema violation is collected, so one run always reports the complete set
//! of problems. An empty error list is the only notion of success.
//!
//! ## Quick Start
//!
//! ```no_run
//! use specdock::{DocSetOptions, DocumentSource, HttpFetcher, Pipeline};
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(Arc::new(HttpFetcher::new()));
//! let set = pipeline
//!     .run(
//!         DocumentSource::Url("https://petstore.swagger.io/v2/swagger.json".into()),
//!         DocSetOptions::default(),
//!     )
//!     .await?;
//! println!("{} validation error(s)", set.errors.len());
//! for (tag, routes) in &set.paths {
//!     println!("{tag}: {} route(s)", routes.as_object().map_or(0, |m| m.len()));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Stages are asynchronous and strictly sequential; only fetch calls suspend.
//! A [`Pipeline`] is immutable and cheap to share: each run owns its
//! context, so concurrent runs on different documents never contend. There is
//! no cancellation: wrap a run in `tokio::time::timeout` and discard the
//! future if you need a deadline.

pub mod cli;
pub mod document;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod rules;
pub mod runtime_config;
pub mod schema;

pub use document::{load_document, DocumentSource, LoadError};
pub use fetch::{Fetch, FetchFailure, HttpFetcher};
pub use normalize::{derive_tags, group_paths, normalize, PathGroup, PathGrouping};
pub use pipeline::{
    Context, DocSet, DocSetOptions, LifecycleEvent, Notify, Pipeline, PipelineError,
    ValidationBackend,
};
pub use rules::{
    declared_version, evaluate, RequireCondition, RequiredIf, RuleOutcome, RuleReport, Ruleset,
    RulesetRegistry, UnsupportedVersion, ValidationRule, ValueKind,
};
pub use runtime_config::RuntimeConfig;
pub use schema::{schema_url, validate_against_schema, SchemaError, SchemaViolation};
