//! HTTP fetch capability used by the loader and schema stages.
//!
//! The pipeline never talks to the network directly: everything that needs a
//! remote resource goes through the [`Fetch`] trait, so hosts can substitute
//! their own transport (or an in-memory fake in tests). [`HttpFetcher`] is the
//! reqwest-backed default implementation.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Transport-level failure reported by a [`Fetch`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// HTTP status code when the server answered with a non-success status.
    pub status: Option<u16>,
    pub message: String,
}

impl FetchFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        FetchFailure {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "fetch failed with status {}: {}", code, self.message),
            None => write!(f, "fetch failed: {}", self.message),
        }
    }
}

impl std::error::Error for FetchFailure {}

/// Generic HTTP GET capability.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure>;
}

/// Default [`Fetch`] implementation backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Fetcher with a per-request timeout bound, typically taken from
    /// [`RuntimeConfig`](crate::runtime_config::RuntimeConfig).
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        HttpFetcher { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        debug!(url = %url, "fetching remote resource");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::new(e.status().map(|s| s.as_u16()), e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::new(
                Some(status.as_u16()),
                format!("GET {} returned {}", url, status),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| FetchFailure::new(None, e.to_string()))
    }
}
