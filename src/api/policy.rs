//! Policies: `/api/policies`.

use crate::api::definition::{json_definition, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a policy declaration.
///
/// ```json
/// {"pattern": "^amq.", "definition": {"federation-upstream-set": "all"}, "priority": 0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// Regular expression matched against resource names.
    pub pattern: String,
    /// Keys applied to every matching resource.
    pub definition: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// `queues`, `exchanges` or `all`.
    #[serde(rename = "apply-to", default, skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolicyDefinition {
    pub fn new(pattern: impl Into<String>, definition: Map<String, Value>) -> Self {
        Self {
            pattern: pattern.into(),
            definition,
            priority: None,
            apply_to: None,
            extra: Map::new(),
        }
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn apply_to(mut self, apply_to: impl Into<String>) -> Self {
        self.apply_to = Some(apply_to.into());
        self
    }
}

json_definition!(
    PolicyDefinition,
    "Error creating policy",
    "Policy",
    ["pattern", "definition"]
);

/// Operations on policies.
#[derive(Debug, Clone, Copy)]
pub struct Policies<'a> {
    client: &'a Client,
}

impl<'a> Policies<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all policies, or of all policies in `vhost`.
    pub fn all(&self, vhost: Option<&str>) -> Result<Value, Error> {
        self.client
            .get(ApiPath::new("/api/policies").optional_segment(vhost))
    }

    /// An individual policy.
    pub fn get(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(policy_path(vhost, name))
    }

    /// Creates or replaces a policy.
    pub fn create(
        &self,
        vhost: &str,
        name: &str,
        definition: impl IntoDefinition<PolicyDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client.put(policy_path(vhost, name), Some(&definition))
    }

    /// Deletes a policy.
    pub fn delete(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.delete(policy_path(vhost, name))
    }
}

fn policy_path(vhost: &str, name: &str) -> ApiPath {
    ApiPath::new("/api/policies").segment(vhost).segment(name)
}
