//! Cluster nodes: `/api/nodes`.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde_json::Value;

/// Read-only access to cluster nodes.
#[derive(Debug, Clone, Copy)]
pub struct Nodes<'a> {
    client: &'a Client,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of nodes in the cluster.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/nodes"))
    }

    /// An individual node. With `memory` set, the response also carries a
    /// memory usage breakdown.
    pub fn get(&self, name: &str, memory: bool) -> Result<Value, Error> {
        let path = ApiPath::new("/api/nodes").segment(name);
        let path = if memory {
            path.query("memory", "true")
        } else {
            path
        };
        self.client.get(path)
    }
}
