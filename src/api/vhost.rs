//! Virtual hosts: `/api/vhosts`.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde_json::Value;

/// Operations on virtual hosts.
#[derive(Debug, Clone, Copy)]
pub struct Vhosts<'a> {
    client: &'a Client,
}

impl<'a> Vhosts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all virtual hosts.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/vhosts"))
    }

    /// An individual virtual host.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.client.get(vhost_path(name))
    }

    /// Creates a virtual host. A vhost only has a name, so no body is sent.
    pub fn create(&self, name: &str) -> Result<Value, Error> {
        self.client.put(vhost_path(name), None::<&Value>)
    }

    /// Deletes a virtual host and everything in it.
    pub fn delete(&self, name: &str) -> Result<Value, Error> {
        self.client.delete(vhost_path(name))
    }

    /// A list of all permissions granted in the virtual host.
    pub fn permissions(&self, name: &str) -> Result<Value, Error> {
        self.client.get(vhost_path(name).literal("permissions"))
    }
}

fn vhost_path(name: &str) -> ApiPath {
    ApiPath::new("/api/vhosts").segment(name)
}
