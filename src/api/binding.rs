//! Bindings: `/api/bindings`.
//!
//! An exchange and a queue (or two exchanges) can be bound many times with
//! different routing keys and arguments. Each such binding is addressed by
//! its `props`, a server-generated name derived from the routing key and a
//! hash of the arguments.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a binding creation request.
///
/// `arguments` is left out of the body when absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingDefinition {
    pub routing_key: String,
    #[serde(default, skip_serializing_if = "is_empty_arguments")]
    pub arguments: Option<Map<String, Value>>,
}

fn is_empty_arguments(arguments: &Option<Map<String, Value>>) -> bool {
    arguments.as_ref().map_or(true, Map::is_empty)
}

impl BindingDefinition {
    pub fn new(routing_key: impl Into<String>, arguments: Option<Map<String, Value>>) -> Self {
        Self {
            routing_key: routing_key.into(),
            arguments,
        }
    }
}

/// Operations on bindings.
#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    client: &'a Client,
}

impl<'a> Bindings<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all bindings, or of all bindings in `vhost`.
    pub fn all(&self, vhost: Option<&str>) -> Result<Value, Error> {
        self.client
            .get(ApiPath::new("/api/bindings").optional_segment(vhost))
    }

    /// A list of all bindings between an exchange and a queue.
    pub fn between(&self, vhost: &str, exchange: &str, queue: &str) -> Result<Value, Error> {
        self.client.get(queue_binding_path(vhost, exchange, queue))
    }

    /// An individual binding between an exchange and a queue.
    pub fn get(&self, vhost: &str, exchange: &str, queue: &str, props: &str) -> Result<Value, Error> {
        self.client
            .get(queue_binding_path(vhost, exchange, queue).segment(props))
    }

    /// Binds `queue` to `exchange`.
    ///
    /// This is additive: every call creates a new binding. The server answers
    /// with a `Location` header naming it; use [`Client::execute`] to read it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rabbitmq_management::{Client, ClientConfig};
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), rabbitmq_management::Error> {
    /// let client = Client::new(ClientConfig::default())?;
    /// let arguments = json!({"x-match": "all"}).as_object().cloned();
    /// client
    ///     .bindings()
    ///     .create("/", "amq.headers", "audit", "", arguments)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn create(
        &self,
        vhost: &str,
        exchange: &str,
        queue: &str,
        routing_key: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<Value, Error> {
        let definition = BindingDefinition::new(routing_key, arguments);
        self.client
            .post(queue_binding_path(vhost, exchange, queue), &definition)
    }

    /// Removes an individual binding between an exchange and a queue.
    pub fn delete(&self, vhost: &str, exchange: &str, queue: &str, props: &str) -> Result<Value, Error> {
        self.client
            .delete(queue_binding_path(vhost, exchange, queue).segment(props))
    }

    /// A list of all bindings between two exchanges.
    pub fn between_exchanges(
        &self,
        vhost: &str,
        source: &str,
        destination: &str,
    ) -> Result<Value, Error> {
        self.client
            .get(exchange_binding_path(vhost, source, destination))
    }

    /// An individual binding between two exchanges.
    pub fn get_exchange_binding(
        &self,
        vhost: &str,
        source: &str,
        destination: &str,
        props: &str,
    ) -> Result<Value, Error> {
        self.client
            .get(exchange_binding_path(vhost, source, destination).segment(props))
    }

    /// Binds exchange `destination` to exchange `source`.
    pub fn create_exchange_binding(
        &self,
        vhost: &str,
        source: &str,
        destination: &str,
        routing_key: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<Value, Error> {
        let definition = BindingDefinition::new(routing_key, arguments);
        self.client
            .post(exchange_binding_path(vhost, source, destination), &definition)
    }

    /// Removes an individual binding between two exchanges.
    pub fn delete_exchange_binding(
        &self,
        vhost: &str,
        source: &str,
        destination: &str,
        props: &str,
    ) -> Result<Value, Error> {
        self.client
            .delete(exchange_binding_path(vhost, source, destination).segment(props))
    }
}

fn queue_binding_path(vhost: &str, exchange: &str, queue: &str) -> ApiPath {
    ApiPath::new("/api/bindings")
        .segment(vhost)
        .literal("e")
        .segment(exchange)
        .literal("q")
        .segment(queue)
}

fn exchange_binding_path(vhost: &str, source: &str, destination: &str) -> ApiPath {
    ApiPath::new("/api/bindings")
        .segment(vhost)
        .literal("e")
        .segment(source)
        .literal("e")
        .segment(destination)
}
