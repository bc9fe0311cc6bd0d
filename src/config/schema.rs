//! Configuration schema for the management client.
//!
//! This module defines the configuration structure, its documented defaults
//! and its validation logic.

use crate::auth::Credentials;
use crate::executor::validate_url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default management API endpoint of a local broker.
pub const DEFAULT_BASE_URL: &str = "http://localhost:15672";

/// Default user created by a fresh RabbitMQ installation.
pub const DEFAULT_USERNAME: &str = "guest";

/// Default password of [`DEFAULT_USERNAME`].
pub const DEFAULT_PASSWORD: &str = "guest";

/// Configuration of a management API client.
///
/// Every field has a default, so a settings document only needs to name the
/// fields it changes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the management plugin, without the `/api` suffix.
    ///
    /// Defaults to `http://localhost:15672`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Username for HTTP Basic authentication. Defaults to `guest`.
    #[serde(default = "default_username")]
    pub username: String,

    /// Password for HTTP Basic authentication. Defaults to `guest`.
    #[serde(default = "default_password")]
    pub password: String,

    /// Request timeout in milliseconds.
    ///
    /// Maximum time to wait for a complete response (including connection,
    /// headers, and body download). Defaults to 30000ms (30 seconds).
    ///
    /// Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Whether to validate SSL/TLS certificates.
    ///
    /// **Warning:** Disabling SSL validation can expose you to security risks.
    #[serde(default = "default_validate_ssl")]
    pub validate_ssl: bool,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            password: default_password(),
            timeout: default_timeout(),
            validate_ssl: default_validate_ssl(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("validate_ssl", &self.validate_ssl)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.base_url).map_err(|e| format!("baseUrl is invalid: {}", e))?;

        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.username.is_empty() {
            return Err("username must not be empty".to_string());
        }

        Ok(())
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout)
    }

    /// Returns the configured credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the Basic authentication credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Sets the request timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = timeout_ms;
        self
    }
}

// Default value functions for serde

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

fn default_timeout() -> u64 {
    30000 // 30 seconds in milliseconds
}

fn default_validate_ssl() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("rabbitmq-management/{}", env!("CARGO_PKG_VERSION"))
}
