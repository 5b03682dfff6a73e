use super::source::{wants_yaml, DocumentSource};
use crate::fetch::{Fetch, FetchFailure};
use serde_json::Value;
use std::fmt;
use tracing::error;

/// Failure while turning heterogeneous input into a document.
///
/// These are infrastructure errors: they abort the pipeline run that hit
/// them. Data-level validation problems are accumulated elsewhere.
#[derive(Debug)]
pub enum LoadError {
    /// The input text could not be parsed. The message has the parser's
    /// verbose suffix stripped before it is surfaced.
    Parse { message: String },
    /// The network fetch for a URL source failed.
    Fetch(FetchFailure),
    /// No input was supplied for the run.
    EmptySource,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Parse { message } => write!(f, "Invalid JSON: {}", message),
            LoadError::Fetch(failure) => write!(f, "{}", failure),
            LoadError::EmptySource => {
                write!(f, "Required document input missing for this run")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Fetch(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<FetchFailure> for LoadError {
    fn from(failure: FetchFailure) -> Self {
        LoadError::Fetch(failure)
    }
}

/// Strip the parser's verbose location suffix before surfacing the message:
/// truncate at the literal `"in JSON"` marker, then trim.
fn clean_parse_message(raw: &str) -> String {
    raw.split("in JSON")
        .next()
        .unwrap_or(raw)
        .trim()
        .to_string()
}

fn parse_document(text: &str, yaml: bool) -> Result<Value, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource);
    }
    let parsed = if yaml {
        serde_yaml::from_str(text).map_err(|e| LoadError::Parse {
            message: clean_parse_message(&e.to_string()),
        })
    } else {
        serde_json::from_str(text).map_err(|e| LoadError::Parse {
            message: clean_parse_message(&e.to_string()),
        })
    };
    parsed.inspect_err(|e| error!(error = %e, "failed to parse document"))
}

/// Normalize a [`DocumentSource`] into one in-memory document.
///
/// URL sources fetch through the supplied capability and then parse per the
/// extension heuristic; raw text parses as JSON; inline values transfer
/// ownership untouched. No global state is mutated.
pub async fn load_document(
    source: DocumentSource,
    fetcher: &dyn Fetch,
) -> Result<Value, LoadError> {
    match source {
        DocumentSource::Url(url) => {
            let text = fetcher.fetch(&url).await.map_err(|failure| {
                error!(url = %url, error = %failure, "document fetch failed");
                LoadError::Fetch(failure)
            })?;
            parse_document(&text, wants_yaml(&url))
        }
        DocumentSource::Text(text) => parse_document(&text, false),
        DocumentSource::Inline(value) => Ok(value),
    }
}
