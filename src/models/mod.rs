//! Data models for HTTP requests and responses.
//!
//! These are the values exchanged between the client and its transport.

pub mod request;
pub mod response;

pub use request::{HttpMethod, HttpRequest};
pub use response::{ApiResponse, HttpResponse};
