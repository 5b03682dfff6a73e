//! Environment variable-based runtime configuration.
//!
//! ## Environment Variables
//!
//! ### `SPECDOCK_SCHEMA_BASE`
//!
//! Base URL of the published schema repository used by the external-schema
//! validation path. Defaults to the OpenAPI-Specification schema repository.
//!
//! ### `SPECDOCK_FETCH_TIMEOUT_MS`
//!
//! Timeout in decimal milliseconds applied to every fetch issued by the
//! default HTTP fetcher. Default: `30000` (30 s).
//!
//! ## Usage
//!
//! ```rust
//! use specdock::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("schema base: {}", config.schema_base);
//! ```

use crate::schema::DEFAULT_SCHEMA_BASE;
use std::env;
use std::time::Duration;

const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`]; pass it to the
/// pipeline via [`Pipeline::with_config`](crate::pipeline::Pipeline::with_config).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Base URL of the published schema repository.
    pub schema_base: String,
    /// Timeout applied to outgoing fetches.
    pub fetch_timeout: Duration,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let schema_base =
            env::var("SPECDOCK_SCHEMA_BASE").unwrap_or_else(|_| DEFAULT_SCHEMA_BASE.to_string());
        let fetch_timeout = match env::var("SPECDOCK_FETCH_TIMEOUT_MS") {
            Ok(val) => Duration::from_millis(val.parse().unwrap_or(DEFAULT_FETCH_TIMEOUT_MS)),
            Err(_) => Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        };
        RuntimeConfig {
            schema_base,
            fetch_timeout,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            schema_base: DEFAULT_SCHEMA_BASE.to_string(),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}
