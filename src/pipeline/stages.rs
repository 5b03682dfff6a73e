use super::context::{Context, ValidationBackend};
use crate::document::{load_document, LoadError};
use crate::fetch::Fetch;
use crate::normalize;
use crate::rules::{self, RulesetRegistry, UnsupportedVersion};
use crate::schema::{self, SchemaError};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Infrastructure failure inside a stage. Aborts the run; data-level
/// violations go to [`Context::errors`] instead and never end up here.
#[derive(Debug)]
pub enum StageError {
    Load(LoadError),
    Schema(SchemaError),
    UnsupportedVersion(UnsupportedVersion),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::Load(e) => write!(f, "{}", e),
            StageError::Schema(e) => write!(f, "{}", e),
            StageError::UnsupportedVersion(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StageError::Load(e) => Some(e),
            StageError::Schema(e) => Some(e),
            StageError::UnsupportedVersion(e) => Some(e),
        }
    }
}

/// One step of the pipeline: takes the accumulated context, returns the
/// updated context. Stages run strictly in sequence; a stage only starts
/// after its predecessor resolved.
#[async_trait]
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, ctx: Context) -> Result<Context, StageError>;
}

/// Normalizes the run's input into the in-memory document.
pub struct LoadStage {
    pub(super) fetcher: Arc<dyn Fetch>,
}

#[async_trait]
impl Stage for LoadStage {
    fn name(&self) -> &'static str {
        "load"
    }

    async fn run(&self, mut ctx: Context) -> Result<Context, StageError> {
        let source = ctx
            .source
            .take()
            .ok_or(StageError::Load(LoadError::EmptySource))?;
        ctx.document = load_document(source, self.fetcher.as_ref())
            .await
            .map_err(StageError::Load)?;
        Ok(ctx)
    }
}

/// Resolves and fetches the published schema for the document's declared
/// version. No-op under the rules backend.
pub struct FetchSchemaStage {
    pub(super) fetcher: Arc<dyn Fetch>,
    pub(super) schema_base: String,
}

#[async_trait]
impl Stage for FetchSchemaStage {
    fn name(&self) -> &'static str {
        "fetch-schema"
    }

    async fn run(&self, mut ctx: Context) -> Result<Context, StageError> {
        if ctx.options.backend != ValidationBackend::Schema {
            return Ok(ctx);
        }
        let version = rules::declared_version(&ctx.document).to_string();
        let url =
            schema::schema_url(&version, &self.schema_base).map_err(StageError::Schema)?;
        debug!(version = %version, url = %url, "resolving validation schema");
        let text = self.fetcher.fetch(&url).await.map_err(|failure| {
            StageError::Schema(SchemaError::Schema {
                message: failure.to_string(),
            })
        })?;
        let schema: Value = serde_json::from_str(&text).map_err(|e| {
            StageError::Schema(SchemaError::Schema {
                message: e.to_string(),
            })
        })?;
        ctx.schema = Some(schema);
        Ok(ctx)
    }
}

/// Runs the configured validation backend, accumulating violations.
pub struct ValidateStage {
    pub(super) registry: Arc<RulesetRegistry>,
}

#[async_trait]
impl Stage for ValidateStage {
    fn name(&self) -> &'static str {
        "validate"
    }

    async fn run(&self, mut ctx: Context) -> Result<Context, StageError> {
        match ctx.options.backend {
            ValidationBackend::Rules => {
                let report = rules::validate(&ctx.document, &self.registry)
                    .map_err(StageError::UnsupportedVersion)?;
                ctx.errors.extend(report.errors);
                ctx.results = report.results;
            }
            ValidationBackend::Schema => {
                let Some(schema) = ctx.schema.as_ref() else {
                    return Ok(ctx);
                };
                match schema::validate_against_schema(&ctx.document, schema) {
                    Ok(violations) => {
                        ctx.errors
                            .extend(violations.iter().map(ToString::to_string));
                    }
                    Err(SchemaError::ValidatorUnavailable { message }) => {
                        // Capability missing: the result is unknown, not failed.
                        warn!(
                            error = %message,
                            "schema validator unavailable; structural validation skipped"
                        );
                    }
                    Err(other) => return Err(StageError::Schema(other)),
                }
            }
        }
        Ok(ctx)
    }
}

/// Derives the tag list and regroups the `paths` map.
pub struct DeriveTagsStage;

#[async_trait]
impl Stage for DeriveTagsStage {
    fn name(&self) -> &'static str {
        "derive-tags"
    }

    async fn run(&self, mut ctx: Context) -> Result<Context, StageError> {
        let normalized = normalize::normalize(&ctx.document, ctx.options.order_paths);
        ctx.tags = normalized.tags;
        ctx.paths = normalized.paths;
        Ok(ctx)
    }
}
