//! Consumers: `/api/consumers`.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde_json::Value;

/// Read-only access to queue consumers.
#[derive(Debug, Clone, Copy)]
pub struct Consumers<'a> {
    client: &'a Client,
}

impl<'a> Consumers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all consumers, or of the consumers in `vhost`.
    pub fn all(&self, vhost: Option<&str>) -> Result<Value, Error> {
        self.client
            .get(ApiPath::new("/api/consumers").optional_segment(vhost))
    }
}
