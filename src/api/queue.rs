//! Queues: `/api/queues`.

use crate::api::definition::{from_json, is_absent, json_definition, IntoDefinition};
use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a queue declaration. All keys are optional.
///
/// ```json
/// {"auto_delete": false, "durable": true, "arguments": {}, "node": "rabbit@smacmullen"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueueDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn durable(mut self, durable: bool) -> Self {
        self.durable = Some(durable);
        self
    }

    pub fn auto_delete(mut self, auto_delete: bool) -> Self {
        self.auto_delete = Some(auto_delete);
        self
    }

    pub fn arguments(mut self, arguments: Map<String, Value>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }
}

json_definition!(QueueDefinition, "Error creating queue", "Queue", []);

/// How payloads are returned by [`Queues::get_messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageEncoding {
    /// Text if the payload is valid UTF-8, base64 otherwise.
    Auto,
    /// Always base64.
    Base64,
}

/// What happens to messages after [`Queues::get_messages`] reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckMode {
    AckRequeueTrue,
    AckRequeueFalse,
    RejectRequeueTrue,
    RejectRequeueFalse,
}

/// Body of a message retrieval request.
///
/// Defaults to `{"count":5,"requeue":true,"encoding":"auto"}`. Servers from
/// 3.7 on expect `ackmode` instead of `requeue`; exactly one of the two is
/// normally set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetMessagesRequest {
    /// Maximum number of messages to get. Fewer may be returned.
    pub count: u32,
    /// Whether the messages go back to the queue. Requeued messages may change
    /// position and get their redelivered flag set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requeue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ackmode: Option<AckMode>,
    pub encoding: MessageEncoding,
    /// Truncate payloads larger than this many bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GetMessagesRequest {
    /// A request using `ackmode`, with `requeue` left out.
    pub fn with_ackmode(count: u32, ackmode: AckMode) -> Self {
        Self {
            count,
            requeue: None,
            ackmode: Some(ackmode),
            ..Self::default()
        }
    }

    pub fn encoding(mut self, encoding: MessageEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn truncate(mut self, bytes: u64) -> Self {
        self.truncate = Some(bytes);
        self
    }
}

impl Default for GetMessagesRequest {
    fn default() -> Self {
        Self {
            count: 5,
            requeue: Some(true),
            ackmode: None,
            encoding: MessageEncoding::Auto,
            truncate: None,
            extra: Map::new(),
        }
    }
}

impl IntoDefinition<GetMessagesRequest> for Value {
    fn into_definition(self) -> Result<GetMessagesRequest, Error> {
        let has_ackmode = self
            .as_object()
            .map_or(false, |object| !is_absent(object, "ackmode"));
        let required: &[&str] = if has_ackmode {
            &["count", "encoding"]
        } else {
            &["count", "requeue", "encoding"]
        };
        from_json(self, "Error retrieving messages", "Request", required)
    }
}

/// Operations on queues.
#[derive(Debug, Clone, Copy)]
pub struct Queues<'a> {
    client: &'a Client,
}

impl<'a> Queues<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all queues, or of all queues in `vhost`.
    pub fn all(&self, vhost: Option<&str>) -> Result<Value, Error> {
        self.client
            .get(ApiPath::new("/api/queues").optional_segment(vhost))
    }

    /// An individual queue.
    pub fn get(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(queue_path(vhost, name))
    }

    /// Declares a queue.
    pub fn create(
        &self,
        vhost: &str,
        name: &str,
        definition: impl IntoDefinition<QueueDefinition>,
    ) -> Result<Value, Error> {
        let definition = definition.into_definition()?;
        self.client.put(queue_path(vhost, name), Some(&definition))
    }

    /// Deletes a queue.
    pub fn delete(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.delete(queue_path(vhost, name))
    }

    /// A list of all bindings on the queue.
    pub fn bindings(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.get(queue_path(vhost, name).literal("bindings"))
    }

    /// Purges all messages from the queue.
    pub fn purge(&self, vhost: &str, name: &str) -> Result<Value, Error> {
        self.client.delete(queue_path(vhost, name).literal("contents"))
    }

    /// Gets messages from the queue.
    ///
    /// This is a POST, not a GET: unless `requeue` is set the messages are
    /// removed from the queue. Meant for diagnostics, not for consuming.
    pub fn get_messages(
        &self,
        vhost: &str,
        name: &str,
        request: impl IntoDefinition<GetMessagesRequest>,
    ) -> Result<Value, Error> {
        let request = request.into_definition()?;
        self.client.post(queue_path(vhost, name).literal("get"), &request)
    }
}

fn queue_path(vhost: &str, name: &str) -> ApiPath {
    ApiPath::new("/api/queues").segment(vhost).segment(name)
}
