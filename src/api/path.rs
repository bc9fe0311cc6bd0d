//! Management API path construction.
//!
//! Every path is a fixed prefix followed by escaped segments in the order of
//! the server's REST layout, e.g. `/api/bindings/{vhost}/e/{exchange}/q/{queue}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Bytes left as-is in a path segment: ASCII alphanumerics and the RFC 3986
/// unreserved marks. Everything else, `/` included, is percent-encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes a single path segment.
///
/// `.` and `..` are fully encoded so URL normalization cannot collapse them.
///
/// # Examples
///
/// ```
/// use rabbitmq_management::api::escape_segment;
///
/// assert_eq!(escape_segment("/"), "%2F");
/// assert_eq!(escape_segment("amq.direct"), "amq.direct");
/// assert_eq!(escape_segment("my queue"), "my%20queue");
/// ```
pub fn escape_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(segment, SEGMENT).to_string(),
    }
}

/// Builder for a management API path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    path: String,
    has_query: bool,
}

impl ApiPath {
    /// Starts a path from a fixed, already valid prefix such as `/api/queues`.
    pub fn new(prefix: &str) -> Self {
        Self {
            path: prefix.to_string(),
            has_query: false,
        }
    }

    /// Appends an escaped segment.
    pub fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&escape_segment(segment));
        self
    }

    /// Appends a segment when it is present and non-empty; otherwise leaves
    /// the path as it is, so the shorter listing path is used.
    pub fn optional_segment(self, segment: Option<&str>) -> Self {
        match segment {
            Some(s) if !s.is_empty() => self.segment(s),
            _ => self,
        }
    }

    /// Appends a fixed segment verbatim, such as `e`, `q` or `publish`.
    pub fn literal(mut self, literal: &str) -> Self {
        self.path.push('/');
        self.path.push_str(literal);
        self
    }

    /// Appends a query parameter, escaping both key and value.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.path.push(if self.has_query { '&' } else { '?' });
        self.path.push_str(&escape_segment(key));
        self.path.push('=');
        self.path.push_str(&escape_segment(value));
        self.has_query = true;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_string(self) -> String {
        self.path
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for ApiPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
