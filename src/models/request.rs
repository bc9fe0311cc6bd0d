//! HTTP request data models.
//!
//! This module defines the data structures for representing an outbound HTTP
//! request to the management API: the method, target URL, headers and body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request method.
///
/// The management API only uses the four verbs below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - read a resource or a listing
    GET,
    /// HTTP POST method - additive creation (bindings), publish, message retrieval
    POST,
    /// HTTP PUT method - create or replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method, in any case
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string names a supported method, `None` otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            _ => None,
        }
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::GET
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved HTTP request ready to hand to a transport.
///
/// The URL is absolute (base URL already joined with the API path) and the
/// body, if any, is already serialized JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE).
    pub method: HttpMethod,

    /// Absolute target URL.
    pub url: String,

    /// Request headers as key-value pairs.
    ///
    /// Header names are case-insensitive but are stored as provided.
    pub headers: HashMap<String, String>,

    /// Optional serialized request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new HttpRequest with no headers and no body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Absolute target URL
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds a header to the request, replacing any header with the same name.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name
    /// * `value` - Header value
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value);
    }

    /// Adds a header only if no header with the same name (case-insensitive)
    /// is already present.
    pub fn add_default_header(&mut self, name: &str, value: &str) {
        if self.header(name).is_none() {
            self.headers.insert(name.to_string(), value.to_string());
        }
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: String) {
        self.body = Some(body);
    }

    /// Checks if the request has a non-empty body.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().map_or(false, |b| !b.is_empty())
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}
