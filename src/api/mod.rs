//! Resource facades of the management API.
//!
//! Each facade borrows a [`Client`](crate::Client) and maps one resource
//! family onto its REST paths. Facades are obtained from the client, e.g.
//! `client.queues()`, and hold no state of their own.
//!
//! Operations return the decoded JSON body of the response. Non-2xx
//! responses are not errors: the server's error document (`{"error": ...,
//! "reason": ...}`) is returned like any other body.

pub(crate) mod definition;
pub mod path;

pub mod binding;
pub mod channel;
pub mod connection;
pub mod consumer;
pub mod exchange;
pub mod node;
pub mod parameter;
pub mod permission;
pub mod policy;
pub mod queue;
pub mod user;
pub mod vhost;

pub use binding::{BindingDefinition, Bindings};
pub use channel::Channels;
pub use connection::Connections;
pub use consumer::Consumers;
pub use definition::IntoDefinition;
pub use exchange::{ExchangeDefinition, Exchanges, PayloadEncoding, PublishMessage};
pub use node::Nodes;
pub use parameter::{ParameterDefinition, Parameters};
pub use path::{escape_segment, ApiPath};
pub use permission::{PermissionDefinition, Permissions};
pub use policy::{PolicyDefinition, Policies};
pub use queue::{AckMode, GetMessagesRequest, MessageEncoding, QueueDefinition, Queues};
pub use user::{UserCredential, UserDefinition, UserTags, Users};
pub use vhost::Vhosts;
