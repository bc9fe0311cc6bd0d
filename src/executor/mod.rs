//! HTTP request executor.
//!
//! A [`Transport`] turns a fully resolved [`HttpRequest`] into an
//! [`HttpResponse`]. The client never talks to the network directly; it goes
//! through whichever transport it was built with. [`ReqwestTransport`] is the
//! production implementation.

pub mod config;
pub mod error;
pub mod native;

#[cfg(test)]
pub(crate) mod recording;

pub use config::ExecutionConfig;
pub use error::RequestError;
pub use native::ReqwestTransport;

use crate::models::request::HttpRequest;
use crate::models::response::HttpResponse;
use std::sync::Arc;

/// Executes a single HTTP exchange, blocking until the response body has
/// been read.
///
/// Implementations must be safe to call from several threads at once; the
/// client shares one transport between all of its clones.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the raw response.
    ///
    /// Error statuses (4xx/5xx) are responses, not errors. `Err` is reserved
    /// for exchanges that could not be completed.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        (**self).execute(request)
    }
}

/// Validates that the URL is well-formed and uses a supported protocol.
///
/// # Arguments
///
/// * `url` - The URL string to validate
///
/// # Returns
///
/// `Ok(())` if the URL is valid, or `Err(RequestError)` if invalid.
pub fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}
