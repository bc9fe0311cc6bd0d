//! Runtime parameters: `/api/parameters`.
//!
//! Parameters are grouped by component (e.g. `federation-upstream`,
//! `shovel`) and scoped to a virtual host.

use crate::api::definition::{json_definition, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a parameter declaration.
///
/// ```json
/// {"vhost": "/", "component": "federation", "name": "local_username", "value": "guest"}
/// ```
///
/// Only `value` is mandatory; `vhost`, `component` and `name` repeat the
/// path and are kept in `extra` when given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParameterDefinition {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            extra: Map::new(),
        }
    }
}

json_definition!(ParameterDefinition, "Error creating parameter", "Parameter", ["value"]);

/// Operations on runtime parameters.
#[derive(Debug, Clone, Copy)]
pub struct Parameters<'a> {
    client: &'a Client,
}

impl<'a> Parameters<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all parameters.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/parameters"))
    }

    /// A list of all parameters of a component, optionally only those in `vhost`.
    pub fn by_component(&self, component: &str, vhost: Option<&str>) -> Result<Value, Error> {
        self.client.get(
            ApiPath::new("/api/parameters")
                .segment(component)
                .optional_segment(vhost),
        )
    }

    /// An individual parameter.
    pub fn get(&self, component: &str, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(parameter_path(component, vhost, name))
    }

    /// Creates or replaces a parameter.
    pub fn create(
        &self,
        component: &str,
        vhost: &str,
        name: &str,
        definition: impl IntoDefinition<ParameterDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client
            .put(parameter_path(component, vhost, name), Some(&definition))
    }

    /// Deletes a parameter.
    pub fn delete(&self, component: &str, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.delete(parameter_path(component, vhost, name))
    }
}

fn parameter_path(component: &str, vhost: &str, name: &str) -> ApiPath {
    ApiPath::new("/api/parameters")
        .segment(component)
        .segment(vhost)
        .segment(name)
}
