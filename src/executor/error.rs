//! HTTP request execution error types.
//!
//! This module defines error types that can occur while a transport executes
//! a request, including network errors, timeouts, and protocol issues.

use std::fmt;

/// Errors that can occur during HTTP request execution.
///
/// Every variant means the exchange with the management API could not be
/// completed; a response with an error status is never reported here.
#[derive(Debug)]
pub enum RequestError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    NetworkError(String),

    /// Request timed out before completion.
    Timeout,

    /// Invalid URL provided in the request.
    InvalidUrl(String),

    /// TLS/SSL error occurred during HTTPS connection.
    TlsError(String),

    /// HTTP protocol error, such as an invalid header name or value.
    ProtocolError(String),

    /// Error while constructing the HTTP client or request.
    BuildError(String),

    /// Only HTTP and HTTPS are supported.
    UnsupportedProtocol(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RequestError::Timeout => write!(f, "Request timed out"),
            RequestError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            RequestError::TlsError(msg) => write!(f, "TLS/SSL error: {}", msg),
            RequestError::ProtocolError(msg) => write!(f, "HTTP protocol error: {}", msg),
            RequestError::BuildError(msg) => write!(f, "Request build error: {}", msg),
            RequestError::UnsupportedProtocol(protocol) => {
                write!(f, "Unsupported protocol: {}", protocol)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert reqwest errors to RequestError.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::BuildError(message)
        } else if message.contains("certificate") || message.contains("TLS") || message.contains("SSL")
        {
            RequestError::TlsError(message)
        } else {
            RequestError::NetworkError(message)
        }
    }
}

/// Convert URL parsing errors to RequestError.
impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}
