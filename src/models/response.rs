//! HTTP response data models.
//!
//! [`HttpResponse`] is what a transport hands back: raw status, headers and
//! body bytes. [`ApiResponse`] is what the client hands to callers once the
//! body has been decoded as JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Represents a raw HTTP response received from the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 204, 404).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    pub body: Vec<u8>,

    /// Time from sending the request to receiving the complete body.
    pub duration: Duration,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `status_text` - HTTP status text description
    pub fn new(status_code: u16, status_text: String) -> Self {
        Self {
            status_code,
            status_text,
            headers: HashMap::new(),
            body: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Attempts to parse the response body as UTF-8 text.
    pub fn body_as_string(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Adds a header to the response.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name, value);
    }

    /// Sets the response body.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }
}

/// A management API response with its body decoded as JSON.
///
/// The body is passed through untouched: HTTP error statuses are not
/// translated into errors, so callers that care must look at `status_code`
/// or at the server's error object in `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status_code: u16,

    /// Response headers as key-value pairs.
    pub headers: HashMap<String, String>,

    /// Decoded body. An empty body decodes to `Value::Null`.
    pub body: Value,
}

impl ApiResponse {
    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns the `Location` header, set by the server after creating a binding.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("location"))
            .map(|(_, v)| v.as_str())
    }
}
