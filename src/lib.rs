//! Client for the RabbitMQ HTTP Management API
//!
//! This crate wraps the management plugin's REST interface: it builds
//! escaped resource paths, attaches Basic authentication and JSON headers,
//! sends one HTTP exchange per call and decodes the JSON response.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **client**: The [`Client`] dispatcher and the top-level endpoints
//! - **api**: Resource facades (exchanges, queues, bindings, vhosts, users,
//!   permissions, parameters, policies, nodes, connections, channels,
//!   consumers) and path escaping
//! - **executor**: The [`Transport`](executor::Transport) seam and its
//!   reqwest implementation
//! - **models**: HTTP request and response data structures
//! - **auth**: Basic authentication credentials
//! - **config**: Client configuration and settings loading
//! - **error**: The crate-wide [`Error`] type
//!
//! # Responses
//!
//! Every operation returns the decoded response body as a
//! [`serde_json::Value`]. Object key order is preserved. An empty body (as
//! for `204 No Content`) decodes to `Value::Null`. HTTP error statuses are
//! not errors: the server's error document is returned as the value. Use
//! [`Client::execute`] when the status code matters.
//!
//! # Usage
//!
//! ```no_run
//! use rabbitmq_management::{Client, ClientConfig, Error, ExchangeDefinition, PublishMessage};
//!
//! fn main() -> Result<(), Error> {
//!     let config = ClientConfig::default()
//!         .with_base_url("http://localhost:15672")
//!         .with_credentials("guest", "guest");
//!     let client = Client::new(config)?;
//!
//!     client.vhosts().create("staging")?;
//!     client
//!         .exchanges()
//!         .create("staging", "orders", ExchangeDefinition::new("topic").durable(true))?;
//!     client.queues().create("staging", "orders.eu", serde_json::json!({"durable": true}))?;
//!     client
//!         .bindings()
//!         .create("staging", "orders", "orders.eu", "eu.#", None)?;
//!
//!     let routed = client
//!         .exchanges()
//!         .publish("staging", "orders", PublishMessage::text("eu.fr", "hello"))?;
//!     println!("{}", routed);
//!     Ok(())
//! }
//! ```
//!
//! # Validation
//!
//! Create and publish operations accept either a typed definition or a raw
//! JSON value. A raw value missing a mandatory key fails with
//! [`Error::InvalidInput`] before any request is sent:
//!
//! ```
//! use rabbitmq_management::{Client, ClientConfig, Error};
//! # use rabbitmq_management::executor::{RequestError, Transport};
//! # use rabbitmq_management::models::{HttpRequest, HttpResponse};
//! # struct Unreachable;
//! # impl Transport for Unreachable {
//! #     fn execute(&self, _: &HttpRequest) -> Result<HttpResponse, RequestError> {
//! #         unreachable!()
//! #     }
//! # }
//!
//! let client = Client::with_transport(ClientConfig::default(), Unreachable);
//! let result = client
//!     .exchanges()
//!     .create("/", "orders", serde_json::json!({"durable": true}));
//!
//! assert!(matches!(result, Err(Error::InvalidInput(_))));
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod models;

pub use api::{
    AckMode, ApiPath, BindingDefinition, ExchangeDefinition, GetMessagesRequest, IntoDefinition,
    MessageEncoding, ParameterDefinition, PayloadEncoding, PermissionDefinition,
    PolicyDefinition, PublishMessage, QueueDefinition, UserCredential, UserDefinition, UserTags,
};
pub use auth::Credentials;
pub use client::Client;
pub use config::{load_config, load_config_file, ClientConfig};
pub use error::Error;
pub use models::{ApiResponse, HttpMethod};
