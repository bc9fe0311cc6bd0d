//! Error types returned by the management client.

use crate::executor::RequestError;
use std::fmt;

/// Errors returned by client and facade operations.
///
/// HTTP error statuses are not represented here: a 4xx/5xx response is
/// decoded and returned like any other, usually as the server's error object.
#[derive(Debug)]
pub enum Error {
    /// A local precondition failed before any request was built, such as a
    /// definition missing a mandatory key.
    InvalidInput(String),

    /// The transport could not complete the exchange (connection refused,
    /// timeout, TLS failure, ...).
    Network(RequestError),

    /// The response body is not valid JSON.
    Decode {
        /// Status of the response whose body failed to decode.
        status_code: u16,
        /// Parser error message.
        message: String,
    },

    /// The client configuration is invalid or could not be loaded.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Network(err) => write!(f, "{}", err),
            Error::Decode {
                status_code,
                message,
            } => write!(
                f,
                "Failed to decode response body (HTTP {}): {}",
                status_code, message
            ),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::Network(err)
    }
}
