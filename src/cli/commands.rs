use super::cli::{Cli, Commands, OrderPaths};
use crate::document::DocumentSource;
use crate::fetch::HttpFetcher;
use crate::normalize::PathGrouping;
use crate::pipeline::{DocSet, DocSetOptions, Pipeline, ValidationBackend};
use crate::runtime_config::RuntimeConfig;
use clap::Parser;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

impl From<OrderPaths> for PathGrouping {
    fn from(order: OrderPaths) -> Self {
        match order {
            OrderPaths::Route => PathGrouping::Route,
            OrderPaths::Method => PathGrouping::Method,
            OrderPaths::Tag => PathGrouping::Tag,
        }
    }
}

/// Resolve the CLI argument into a document source: existing files are read
/// with the extension heuristic, URL-shaped strings fetch, anything else is
/// treated as raw JSON text.
pub fn source_from_arg(spec: &str) -> anyhow::Result<DocumentSource> {
    let path = Path::new(spec);
    if path.is_file() {
        let content = std::fs::read_to_string(path)?;
        let value: Value = if spec.ends_with(".yaml") || spec.ends_with(".yml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        return Ok(DocumentSource::Inline(value));
    }
    Ok(DocumentSource::detect(spec))
}

fn print_report(set: &DocSet) {
    if set.errors.is_empty() {
        println!("✅ Document is valid.");
    } else {
        eprintln!(
            "\n❌ Document validation failed. {} error(s) found:\n",
            set.errors.len()
        );
        for error in &set.errors {
            eprintln!("  {}", error);
        }
        eprintln!();
    }
    for (group, routes) in &set.paths {
        let count = routes.as_object().map(|m| m.len()).unwrap_or(0);
        println!("{} ({} route(s))", group, count);
    }
}

pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Check {
            spec,
            order_paths,
            schema,
            json,
        } => {
            let config = RuntimeConfig::from_env();
            let fetcher = Arc::new(HttpFetcher::with_timeout(config.fetch_timeout));
            let pipeline = Pipeline::new(fetcher).with_config(config);
            let options = DocSetOptions {
                order_paths: (*order_paths).into(),
                backend: if *schema {
                    ValidationBackend::Schema
                } else {
                    ValidationBackend::Rules
                },
            };
            let source = source_from_arg(spec)?;
            let set = pipeline.run(source, options).await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&set)?);
            } else {
                print_report(&set);
            }
            if !set.errors.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
