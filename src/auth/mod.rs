//! HTTP authentication.
//!
//! The management API only supports HTTP Basic authentication. Credentials
//! are fixed when the client is built and attached to every request.

pub mod basic;

use std::fmt;

/// A username/password pair used for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the `Authorization` header value for these credentials.
    pub fn authorization_header(&self) -> String {
        basic::basic_auth(&self.username, &self.password)
    }
}

// The password is never printed.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let credentials = Credentials::new("guest", "guest");
        assert_eq!(credentials.authorization_header(), "Basic Z3Vlc3Q6Z3Vlc3Q=");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("admin", "s3cret");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret"));
    }
}
