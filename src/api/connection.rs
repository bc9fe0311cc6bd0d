//! Client connections: `/api/connections`.

use crate::api::path::ApiPath;
use crate::client::Client;
use crate::error::Error;
use serde_json::Value;

/// Operations on open connections.
#[derive(Debug, Clone, Copy)]
pub struct Connections<'a> {
    client: &'a Client,
}

impl<'a> Connections<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A list of all open connections.
    pub fn all(&self) -> Result<Value, Error> {
        self.client.get(ApiPath::new("/api/connections"))
    }

    /// An individual connection. Names look like
    /// `127.0.0.1:54321 -> 127.0.0.1:5672`.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.client.get(connection_path(name))
    }

    /// Closes a connection.
    pub fn delete(&self, name: &str) -> Result<Value, Error> {
        self.client.delete(connection_path(name))
    }
}

fn connection_path(name: &str) -> ApiPath {
    ApiPath::new("/api/connections").segment(name)
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::executor::recording::RecordingTransport;
    use crate::models::HttpMethod;

    const NAME: &str = "127.0.0.1:54321 -> 127.0.0.1:5672";
    const ESCAPED: &str = "127.0.0.1%3A54321%20-%3E%20127.0.0.1%3A5672";

    #[test]
    fn test_get_escapes_connection_name() {
        let (client, transport) = test_client(RecordingTransport::with_body(r#"{"name":"c"}"#));

        let connection = client.connections().get(NAME).unwrap();

        assert_eq!(connection["name"], "c");
        assert_eq!(
            transport.only_request().url,
            format!("http://localhost:15672/api/connections/{}", ESCAPED)
        );
    }

    #[test]
    fn test_delete_closes_connection() {
        let (client, transport) = test_client(RecordingTransport::no_content());

        client.connections().delete(NAME).unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, HttpMethod::DELETE);
        assert!(request.url.ends_with(ESCAPED));
    }

    #[test]
    fn test_all() {
        let (client, transport) = test_client(RecordingTransport::with_body("[]"));

        client.connections().all().unwrap();

        assert_eq!(
            transport.only_request().url,
            "http://localhost:15672/api/connections"
        );
    }
}
