//! HTTP request execution configuration.
//!
//! The subset of [`ClientConfig`] the transport needs to build its HTTP client.

use crate::config::ClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Request timeout in milliseconds, covering connect, headers and body.
    pub timeout_ms: u64,

    /// Whether invalid TLS certificates are rejected.
    pub validate_ssl: bool,

    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl ExecutionConfig {
    /// Creates an ExecutionConfig with the given timeout and default TLS
    /// validation and user agent.
    ///
    /// # Arguments
    ///
    /// * `timeout_ms` - Timeout duration in milliseconds
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            ..Self::from_client_config(&ClientConfig::default())
        }
    }

    /// Derives the execution settings from a client configuration.
    pub fn from_client_config(config: &ClientConfig) -> Self {
        Self {
            timeout_ms: config.timeout,
            validate_ssl: config.validate_ssl,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from_client_config(&ClientConfig::default())
    }
}
