//! Permissions of a user in a virtual host: `/api/permissions`.

use crate::api::definition::{json_definition, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a permission grant. Each field is a regular expression over
/// resource names.
///
/// ```json
/// {"configure": ".*", "write": ".*", "read": ".*"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    pub configure: String,
    pub write: String,
    pub read: String,
}

impl PermissionDefinition {
    pub fn new(
        configure: impl Into<String>,
        write: impl Into<String>,
        read: impl Into<String>,
    ) -> Self {
        Self {
            configure: configure.into(),
            write: write.into(),
            read: read.into(),
        }
    }

    /// Full access to every resource.
    pub fn full() -> Self {
        Self::new(".*", ".*", ".*")
    }
}

json_definition!(
    PermissionDefinition,
    "Error creating permission",
    "Permission",
    ["configure", "write", "read"]
);

/// Operations on permissions.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    client: &'a Client,
}

impl<'a> Permissions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all permissions for all users.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/permissions"))
    }

    /// The permissions of `user` in `vhost`.
    pub fn get(&self, vhost: &str, user: &str) -> Result<Value, Error> {
        self.client.get(permission_path(vhost, user))
    }

    /// Grants permissions to `user` in `vhost`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `definition` is a raw JSON value without all
    /// of `configure`, `write` and `read`.
    pub fn create(
        &self,
        vhost: &str,
        user: &str,
        definition: impl IntoDefinition<PermissionDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client.put(permission_path(vhost, user), Some(&definition))
    }

    /// Revokes all permissions of `user` in `vhost`.
    pub fn delete(&self, vhost: &str, user: &str) -> Result<Value, Error> {
        self.client.delete(permission_path(vhost, user))
    }
}

fn permission_path(vhost: &str, user: &str) -> ApiPath {
    ApiPath::new("/api/permissions").segment(vhost).segment(user)
}
