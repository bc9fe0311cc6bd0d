//! Basic HTTP authentication implementation.
//!
//! Encodes credentials into an `Authorization` header value according to
//! RFC 7617.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes username and password into a Basic authentication header value.
///
/// # Arguments
///
/// * `username` - The username for authentication
/// * `password` - The password for authentication
///
/// # Returns
///
/// A `String` in the format "Basic <base64_encoded_credentials>".
///
/// # Examples
///
/// ```
/// use rabbitmq_management::auth::basic::basic_auth;
///
/// let auth_header = basic_auth("guest", "guest");
/// assert_eq!(auth_header, "Basic Z3Vlc3Q6Z3Vlc3Q=");
/// ```
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    let encoded = STANDARD.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
