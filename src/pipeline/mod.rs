//! Pipeline orchestration.
//!
//! One run sequences `Load → FetchSchema → Validate → DeriveTags` over a
//! single mutable [`Context`]. Stage N+1 starts only after stage N resolves.
//! An infrastructure failure short-circuits the remaining stages and becomes
//! the run's terminal error; it never crashes the host. Data-level
//! violations accumulate in the context and never abort anything.
//!
//! Lifecycle events are broadcast at the start and end of every run,
//! regardless of outcome, so listeners can manage loading-state UI.

mod context;
mod notify;
mod stages;

pub use context::*;
pub use notify::*;
pub use stages::*;

use crate::document::DocumentSource;
use crate::fetch::Fetch;
use crate::rules::RulesetRegistry;
use crate::runtime_config::RuntimeConfig;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

/// A stage failure tagged with the stage that produced it.
#[derive(Debug)]
pub struct PipelineError {
    pub stage: &'static str,
    pub error: StageError,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pipeline stage '{}' failed: {}", self.stage, self.error)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// The orchestrator.
///
/// Immutable once built and cheap to share: every [`run`](Pipeline::run)
/// owns its context, so concurrent runs on different documents never share
/// mutable state.
pub struct Pipeline {
    fetcher: Arc<dyn Fetch>,
    registry: Arc<RulesetRegistry>,
    notifier: Arc<dyn Notify>,
    config: RuntimeConfig,
}

impl Pipeline {
    /// Pipeline with the built-in ruleset registry, no lifecycle listener,
    /// and default configuration.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Pipeline {
            fetcher,
            registry: Arc::new(RulesetRegistry::builtin()),
            notifier: Arc::new(NullNotifier),
            config: RuntimeConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: RulesetRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notify>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// The ordered stage set for one run.
    fn stages(&self) -> Vec<Box<dyn Stage>> {
        vec![
            Box::new(LoadStage {
                fetcher: Arc::clone(&self.fetcher),
            }),
            Box::new(FetchSchemaStage {
                fetcher: Arc::clone(&self.fetcher),
                schema_base: self.config.schema_base.clone(),
            }),
            Box::new(ValidateStage {
                registry: Arc::clone(&self.registry),
            }),
            Box::new(DeriveTagsStage),
        ]
    }

    /// Run the full pipeline over one input document.
    pub async fn run(
        &self,
        source: DocumentSource,
        options: DocSetOptions,
    ) -> Result<DocSet, PipelineError> {
        self.notifier.notify(LifecycleEvent::LoadingStarted);
        let result = self.execute(source, options).await;
        self.notifier.notify(LifecycleEvent::LoadingFinished);
        match &result {
            Ok(set) => {
                info!(
                    errors = set.errors.len(),
                    tags = set.tags.len(),
                    "pipeline run finished"
                );
            }
            Err(err) => {
                error!(stage = err.stage, error = %err.error, "pipeline run aborted");
            }
        }
        result
    }

    async fn execute(
        &self,
        source: DocumentSource,
        options: DocSetOptions,
    ) -> Result<DocSet, PipelineError> {
        let mut ctx = Context::new(source, options);
        for stage in self.stages() {
            ctx = stage.run(ctx).await.map_err(|error| PipelineError {
                stage: stage.name(),
                error,
            })?;
        }
        Ok(DocSet {
            document: ctx.document,
            tags: ctx.tags,
            paths: ctx.paths,
            errors: ctx.errors,
        })
    }
}
