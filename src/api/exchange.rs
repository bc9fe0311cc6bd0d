//! Exchanges: `/api/exchanges`.

use crate::api::definition::{json_definition, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of an exchange declaration.
///
/// ```json
/// {"type": "direct", "auto_delete": false, "durable": true, "internal": false, "arguments": {}}
/// ```
///
/// `type` is mandatory; other keys are optional. Keys this struct does not
/// name are kept in `extra` and sent as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDefinition {
    #[serde(rename = "type")]
    pub exchange_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExchangeDefinition {
    /// A definition with only the exchange type set.
    pub fn new(exchange_type: impl Into<String>) -> Self {
        Self {
            exchange_type: exchange_type.into(),
            auto_delete: None,
            durable: None,
            internal: None,
            arguments: None,
            extra: Map::new(),
        }
    }

    pub fn durable(mut self, durable: bool) -> Self {
        self.durable = Some(durable);
        self
    }

    pub fn auto_delete(mut self, auto_delete: bool) -> Self {
        self.auto_delete = Some(auto_delete);
        self
    }

    pub fn internal(mut self, internal: bool) -> Self {
        self.internal = Some(internal);
        self
    }

    pub fn arguments(mut self, arguments: Map<String, Value>) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

json_definition!(ExchangeDefinition, "Error creating exchange", "Exchange", ["type"]);

/// How the payload of a [`PublishMessage`] is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    /// The payload is the UTF-8 text of the message.
    String,
    /// The payload is base64 of the message bytes.
    Base64,
}

/// A message to publish through the management API.
///
/// All four fields are mandatory. The publish endpoint is meant for test
/// messages and diagnostics; it does not implement reliable delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishMessage {
    pub properties: Map<String, Value>,
    pub routing_key: String,
    pub payload: String,
    pub payload_encoding: PayloadEncoding,
}

impl PublishMessage {
    /// A UTF-8 text message with no properties.
    pub fn text(routing_key: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            properties: Map::new(),
            routing_key: routing_key.into(),
            payload: payload.into(),
            payload_encoding: PayloadEncoding::String,
        }
    }
}

json_definition!(
    PublishMessage,
    "Error publishing to exchange",
    "Message",
    ["properties", "routing_key", "payload", "payload_encoding"]
);

/// Operations on exchanges.
#[derive(Debug, Clone, Copy)]
pub struct Exchanges<'a> {
    client: &'a Client,
}

impl<'a> Exchanges<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all exchanges, or of all exchanges in `vhost`.
    pub fn all(&self, vhost: Option<&str>) -> Result<Value, Error> {
        self.client
            .get(ApiPath::new("/api/exchanges").optional_segment(vhost))
    }

    /// An individual exchange.
    pub fn get(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(exchange_path(vhost, name))
    }

    /// Declares an exchange.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `definition` is a raw JSON value without a
    /// `type` key. No request is sent in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rabbitmq_management::{Client, ClientConfig, ExchangeDefinition};
    ///
    /// # fn example() -> Result<(), rabbitmq_management::Error> {
    /// let client = Client::new(ClientConfig::default())?;
    /// client
    ///     .exchanges()
    ///     .create("/", "orders", ExchangeDefinition::new("topic").durable(true))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create(
        &self,
        vhost: &str,
        name: &str,
        definition: impl IntoDefinition<ExchangeDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client.put(exchange_path(vhost, name), Some(&definition))
    }

    /// Deletes an exchange.
    pub fn delete(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.delete(exchange_path(vhost, name))
    }

    /// A list of all bindings in which the exchange is the source.
    pub fn source_bindings(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(
            exchange_path(vhost, name)
                .literal("bindings")
                .literal("source"),
        )
    }

    /// A list of all bindings in which the exchange is the destination.
    pub fn destination_bindings(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(
            exchange_path(vhost, name)
                .literal("bindings")
                .literal("destination"),
        )
    }

    /// Publishes a message to the exchange.
    ///
    /// Returns `{"routed": true}` when the message reached at least one queue.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `message` is a raw JSON value missing any of
    /// `properties`, `routing_key`, `payload` or `payload_encoding`.
    pub fn publish(
        &self,
        vhost: &str,
        name: &str,
        message: impl IntoDefinition<PublishMessage>,
    ) -> Result<Value, Error> {
        let message = message.into_definition()?;
        self.client
            .post(exchange_path(vhost, name).literal("publish"), &message)
    }
}

fn exchange_path(vhost: &str, name: &str) -> ApiPath {
    ApiPath::new("/api/exchanges").segment(vhost).segment(name)
}
