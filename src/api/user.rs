//! Users: `/api/users`.

use crate::api::definition::{from_json, is_absent, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a user authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCredential {
    /// A clear-text password, hashed by the server.
    Password(String),
    /// A pre-computed password hash. An empty hash disables password login.
    PasswordHash(String),
}

/// Tags of a user: a comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserTags {
    /// `"administrator,monitoring"`; may be empty.
    Joined(String),
    /// `["administrator", "monitoring"]`
    List(Vec<String>),
}

impl From<&str> for UserTags {
    fn from(tags: &str) -> Self {
        UserTags::Joined(tags.to_string())
    }
}

impl From<String> for UserTags {
    fn from(tags: String) -> Self {
        UserTags::Joined(tags)
    }
}

impl From<Vec<String>> for UserTags {
    fn from(tags: Vec<String>) -> Self {
        UserTags::List(tags)
    }
}

impl From<Vec<&str>> for UserTags {
    fn from(tags: Vec<&str>) -> Self {
        UserTags::List(tags.into_iter().map(str::to_string).collect())
    }
}

/// Body of a user creation request.
///
/// ```json
/// {"password_hash": "...", "hashing_algorithm": "rabbit_password_hashing_sha256", "tags": "administrator"}
/// ```
///
/// Typical tags are `administrator`, `monitoring` and `management`. Keys not
/// named here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDefinition {
    #[serde(flatten)]
    pub credential: UserCredential,
    pub tags: UserTags,
    /// Algorithm that produced a `password_hash`, e.g.
    /// `rabbit_password_hashing_sha256`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashing_algorithm: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserDefinition {
    pub fn with_password(password: impl Into<String>, tags: impl Into<UserTags>) -> Self {
        Self::new(UserCredential::Password(password.into()), tags.into())
    }

    pub fn with_password_hash(hash: impl Into<String>, tags: impl Into<UserTags>) -> Self {
        Self::new(UserCredential::PasswordHash(hash.into()), tags.into())
    }

    pub fn hashing_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.hashing_algorithm = Some(algorithm.into());
        self
    }

    fn new(credential: UserCredential, tags: UserTags) -> Self {
        Self {
            credential,
            tags,
            hashing_algorithm: None,
            extra: Map::new(),
        }
    }
}

impl IntoDefinition<UserDefinition> for Value {
    fn into_definition(self) -> Result<UserDefinition, Error> {
        if let Some(object) = self.as_object() {
            if is_absent(object, "password") && is_absent(object, "password_hash") {
                return Err(Error::InvalidInput(
                    "Error creating user: either 'password' or 'password_hash' must be set"
                        .to_string(),
                ));
            }
        }
        from_json(self, "Error creating user", "User", &["tags"])
    }
}

/// Operations on users.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all users.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/users"))
    }

    /// An individual user.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.client.get(user_path(name))
    }

    /// Creates or replaces a user.
    pub fn create(
        &self,
        name: &str,
        definition: impl IntoDefinition<UserDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client.put(user_path(name), Some(&definition))
    }

    /// Deletes a user.
    pub fn delete(&self, name: &str) -> Result<Value, Error> {
        self.client.delete(user_path(name))
    }

    /// A list of all permissions granted to the user.
    pub fn permissions(&self, name: &str) -> Result<Value, Error> {
        self.client.get(user_path(name).literal("permissions"))
    }
}

fn user_path(name: &str) -> ApiPath {
    ApiPath::new("/api/users").segment(name)
}
