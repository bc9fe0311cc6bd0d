//! Channels: `/api/channels`.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde_json::Value;

/// Read-only access to open channels.
#[derive(Debug, Clone, Copy)]
pub struct Channels<'a> {
    client: &'a Client,
}

impl<'a> Channels<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all open channels.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/channels"))
    }

    /// An individual channel.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/channels").segment(name))
    }
}
