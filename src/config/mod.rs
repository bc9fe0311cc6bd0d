//! Configuration loading for the management client.
//!
//! Settings are read from a JSON document under the `"rabbitmq-management"`
//! key and merged with the defaults of [`ClientConfig`].

pub mod schema;

pub use schema::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PASSWORD, DEFAULT_USERNAME};

use crate::error::Error;
use serde_json::Value;
use std::path::Path;

/// Key under which client settings live in a settings document.
pub const SETTINGS_KEY: &str = "rabbitmq-management";

/// Loads configuration from a settings JSON value.
///
/// Reads the `"rabbitmq-management"` section, fills missing fields with
/// defaults and validates the result. A section that does not deserialize is
/// ignored with a warning and the defaults are used instead.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing settings under the
///   `"rabbitmq-management"` key
///
/// # Returns
///
/// `Ok(ClientConfig)` with the loaded configuration, or `Err(Error::Config)`
/// if validation fails.
///
/// # Example
///
/// ```
/// use rabbitmq_management::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "rabbitmq-management": {
///         "baseUrl": "http://rabbit.internal:15672",
///         "timeout": 5000
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 5000);
/// assert_eq!(config.username, "guest");
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ClientConfig, Error> {
    let mut config = ClientConfig::default();

    if let Some(section) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<ClientConfig>(section.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                log::warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY,
                    e
                );
            }
        }
    }

    config
        .validate()
        .map_err(|e| Error::Config(format!("Invalid configuration: {}", e)))?;

    Ok(config)
}

/// Loads configuration from a JSON settings file.
///
/// The file has the same shape as the value accepted by [`load_config`].
///
/// # Returns
///
/// `Err(Error::Config)` if the file cannot be read, is not JSON, or holds an
/// invalid configuration.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<ClientConfig, Error> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    let settings: Value = serde_json::from_str(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    log::debug!("Loaded settings from {}", path.display());
    load_config(Some(settings))
}
