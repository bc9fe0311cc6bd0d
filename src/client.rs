//! The request dispatcher.
//!
//! [`Client`] owns the configuration and a transport. Every facade builds a
//! path and a verb and hands them to [`Client::send`], which attaches
//! authentication and headers, performs one exchange and decodes the JSON
//! body.

use crate::api::{
    ApiPath, Bindings, Channels, Connections, Consumers, Exchanges, Nodes, Parameters,
    Permissions, Policies, Queues, Users, Vhosts,
};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::executor::{ExecutionConfig, ReqwestTransport, Transport};
use crate::models::request::{HttpMethod, HttpRequest};
use crate::models::response::{ApiResponse, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Content type of every management API request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking client for the RabbitMQ HTTP Management API.
///
/// Cloning is cheap: clones share the same transport (and with it the
/// connection pool). A client holds no mutable state and can be used from
/// several threads at once.
///
/// # Examples
///
/// ```no_run
/// use rabbitmq_management::{Client, ClientConfig};
///
/// # fn example() -> Result<(), rabbitmq_management::Error> {
/// let client = Client::new(ClientConfig::default())?;
///
/// let queues = client.queues().all(Some("/"))?;
/// for queue in queues.as_array().into_iter().flatten() {
///     println!("{}", queue["name"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    authorization: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that talks HTTP through reqwest.
    ///
    /// # Returns
    ///
    /// `Err(Error::Config)` if the configuration is invalid, or
    /// `Err(Error::Network)` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate().map_err(Error::Config)?;
        let transport = ReqwestTransport::new(&ExecutionConfig::from_client_config(&config))?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client on top of an arbitrary transport.
    ///
    /// The configuration is used as given; a malformed base URL surfaces as a
    /// transport error on the first request.
    pub fn with_transport<T: Transport + 'static>(config: ClientConfig, transport: T) -> Self {
        let authorization = config.credentials().authorization_header();
        Self {
            config,
            authorization,
            transport: Arc::new(transport),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one request and returns the decoded JSON body.
    ///
    /// `path` is appended to the configured base URL and must already be
    /// escaped (see [`ApiPath`]). `Content-Type: application/json` and the
    /// Basic `Authorization` header are added unless `headers` sets them.
    ///
    /// # Arguments
    ///
    /// * `path` - API path, e.g. `/api/overview`
    /// * `method` - HTTP verb
    /// * `headers` - Extra request headers
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    ///
    /// The decoded body (`Value::Null` for an empty body), whatever the
    /// response status. `Err(Error::Network)` if the exchange fails,
    /// `Err(Error::Decode)` if the body is not JSON.
    pub fn send(
        &self,
        path: &str,
        method: HttpMethod,
        headers: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.execute(path, method, headers, body)
            .map(|response| response.body)
    }

    /// Like [`Client::send`], but also returns the status code and headers.
    pub fn execute(
        &self,
        path: &str,
        method: HttpMethod,
        headers: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, Error> {
        let body = body.map(encode_body).transpose()?;
        self.dispatch(path, method, headers, body)
    }

    pub(crate) fn get(&self, path: ApiPath) -> Result<Value, Error> {
        self.request(path, HttpMethod::GET, None::<&Value>)
    }

    pub(crate) fn put<B: Serialize + ?Sized>(
        &self,
        path: ApiPath,
        body: Option<&B>,
    ) -> Result<Value, Error> {
        self.request(path, HttpMethod::PUT, body)
    }

    pub(crate) fn post<B: Serialize + ?Sized>(
        &self,
        path: ApiPath,
        body: &B,
    ) -> Result<Value, Error> {
        self.request(path, HttpMethod::POST, Some(body))
    }

    pub(crate) fn delete(&self, path: ApiPath) -> Result<Value, Error> {
        self.request(path, HttpMethod::DELETE, None::<&Value>)
    }

    fn request<B: Serialize + ?Sized>(
        &self,
        path: ApiPath,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<Value, Error> {
        let body = body.map(encode_body).transpose()?;
        self.dispatch(path.as_str(), method, &HashMap::new(), body)
            .map(|response| response.body)
    }

    fn dispatch(
        &self,
        path: &str,
        method: HttpMethod,
        headers: &HashMap<String, String>,
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        let mut request = HttpRequest::new(method, self.url_for(path));
        for (name, value) in headers {
            request.add_header(name.clone(), value.clone());
        }
        request.add_default_header("Content-Type", JSON_CONTENT_TYPE);
        request.add_default_header("Accept", JSON_CONTENT_TYPE);
        request.add_default_header("Authorization", &self.authorization);

        if let Some(body) = body {
            log::trace!("{} {} body: {}", method, path, body);
            request.set_body(body);
        }

        let response = self.transport.execute(&request).map_err(|e| {
            log::debug!("{} {} failed: {}", method, path, e);
            Error::from(e)
        })?;

        log::debug!(
            "{} {} -> {} {} ({} ms)",
            method,
            path,
            response.status_code,
            response.status_text,
            response.duration.as_millis()
        );

        let body = decode_body(&response)?;
        Ok(ApiResponse {
            status_code: response.status_code,
            headers: response.headers,
            body,
        })
    }

    fn url_for(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Various random bits of information that describe the whole system.
    pub fn overview(&self) -> Result<Value, Error> {
        self.get(ApiPath::new("/api/overview"))
    }

    /// Details of the currently authenticated user.
    pub fn whoami(&self) -> Result<Value, Error> {
        self.get(ApiPath::new("/api/whoami"))
    }

    /// A list of extensions to the management plugin.
    pub fn extensions(&self) -> Result<Value, Error> {
        self.get(ApiPath::new("/api/extensions"))
    }

    /// The server definitions: exchanges, queues, bindings, users, virtual
    /// hosts, permissions and parameters. Everything apart from messages.
    pub fn definitions(&self) -> Result<Value, Error> {
        self.get(ApiPath::new("/api/definitions"))
    }

    /// Uploads a set of definitions.
    ///
    /// The server merges them with the existing ones; conflicts are reported
    /// in the returned body and may leave a part-applied set.
    pub fn upload_definitions(&self, definitions: &Value) -> Result<Value, Error> {
        self.post(ApiPath::new("/api/definitions"), definitions)
    }

    /// Declares a test queue in `vhost`, then publishes and consumes a
    /// message. Returns `{"status":"ok"}` when the broker is healthy.
    ///
    /// The test queue is not deleted afterwards.
    pub fn aliveness_test(&self, vhost: &str) -> Result<Value, Error> {
        self.get(ApiPath::new("/api/aliveness-test").segment(vhost))
    }

    /// Exchanges, including publishing.
    pub fn exchanges(&self) -> Exchanges<'_> {
        Exchanges::new(self)
    }

    /// Queues, including purging and reading messages.
    pub fn queues(&self) -> Queues<'_> {
        Queues::new(self)
    }

    /// Bindings between exchanges and queues or between two exchanges.
    pub fn bindings(&self) -> Bindings<'_> {
        Bindings::new(self)
    }

    /// Virtual hosts.
    pub fn vhosts(&self) -> Vhosts<'_> {
        Vhosts::new(self)
    }

    /// Users.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Permissions of users in virtual hosts.
    pub fn permissions(&self) -> Permissions<'_> {
        Permissions::new(self)
    }

    /// Runtime parameters of plugin components.
    pub fn parameters(&self) -> Parameters<'_> {
        Parameters::new(self)
    }

    /// Policies.
    pub fn policies(&self) -> Policies<'_> {
        Policies::new(self)
    }

    /// Cluster nodes.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(self)
    }

    /// Open client connections.
    pub fn connections(&self) -> Connections<'_> {
        Connections::new(self)
    }

    /// Open channels.
    pub fn channels(&self) -> Channels<'_> {
        Channels::new(self)
    }

    /// Queue consumers.
    pub fn consumers(&self) -> Consumers<'_> {
        Consumers::new(self)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, Error> {
    serde_json::to_string(body)
        .map_err(|e| Error::InvalidInput(format!("Request body is not serializable: {}", e)))
}

fn decode_body(response: &HttpResponse) -> Result<Value, Error> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&response.body).map_err(|e| Error::Decode {
        status_code: response.status_code,
        message: e.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::executor::recording::RecordingTransport;
    use crate::executor::RequestError;
    use serde_json::json;

    /// A client on top of a recording transport, with default configuration.
    pub(crate) fn test_client(transport: RecordingTransport) -> (Client, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        let client = Client::with_transport(ClientConfig::default(), transport.clone());
        (client, transport)
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Client::new(ClientConfig::default().with_timeout(0));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_send_builds_request() {
        let (client, transport) = test_client(RecordingTransport::with_body(r#"{"ok":true}"#));

        let body = client
            .send("/api/overview", HttpMethod::GET, &HashMap::new(), None)
            .unwrap();

        assert_eq!(body, json!({"ok": true}));
        let request = transport.only_request();
        assert_eq!(request.method, HttpMethod::GET);
        assert_eq!(request.url, "http://localhost:15672/api/overview");
        assert_eq!(request.header("authorization"), Some("Basic Z3Vlc3Q6Z3Vlc3Q="));
        assert_eq!(request.content_type(), Some("application/json"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_send_serializes_body() {
        let (client, transport) = test_client(RecordingTransport::no_content());
        let body = json!({"zeta": 1, "alpha": [true, null]});

        client
            .send("/api/things", HttpMethod::PUT, &HashMap::new(), Some(&body))
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, HttpMethod::PUT);
        assert_eq!(request.body.as_deref(), Some(r#"{"zeta":1,"alpha":[true,null]}"#));
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let (client, transport) = test_client(RecordingTransport::no_content());
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        headers.insert("X-Trace".to_string(), "abc".to_string());

        client
            .send("/api/overview", HttpMethod::GET, &headers, None)
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.content_type(), Some("text/plain"));
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert!(request.header("authorization").is_some());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let transport = Arc::new(RecordingTransport::no_content());
        let config = ClientConfig::default().with_base_url("http://rabbit:15672/");
        let client = Client::with_transport(config, transport.clone());

        client.overview().unwrap();
        assert_eq!(transport.only_request().url, "http://rabbit:15672/api/overview");
    }

    #[test]
    fn test_configured_credentials_are_used() {
        let transport = Arc::new(RecordingTransport::no_content());
        let config = ClientConfig::default().with_credentials("user", "pass");
        let client = Client::with_transport(config, transport.clone());

        client.whoami().unwrap();
        assert_eq!(
            transport.only_request().header("Authorization"),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn test_empty_body_decodes_to_null() {
        let (client, _) = test_client(RecordingTransport::no_content());
        assert_eq!(client.overview().unwrap(), Value::Null);

        let (client, _) = test_client(RecordingTransport::with_body("  \n"));
        assert_eq!(client.overview().unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let (client, _) = test_client(RecordingTransport::with_body("<html>502</html>"));

        match client.overview() {
            Err(Error::Decode { status_code, .. }) => assert_eq!(status_code, 200),
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_status_is_passed_through() {
        let transport = RecordingTransport::with_responder(|_| {
            let mut response = HttpResponse::new(404, "Not Found".to_string());
            response.set_body(br#"{"error":"Object Not Found","reason":"Not Found"}"#.to_vec());
            Ok(response)
        });
        let (client, _) = test_client(transport);

        let response = client
            .execute("/api/queues/%2F/missing", HttpMethod::GET, &HashMap::new(), None)
            .unwrap();

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body["error"], "Object Not Found");
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let transport = RecordingTransport::with_responder(|_| {
            Err(RequestError::NetworkError("Connection refused".to_string()))
        });
        let (client, _) = test_client(transport);

        assert!(matches!(
            client.overview(),
            Err(Error::Network(RequestError::NetworkError(_)))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let (client, _) = test_client(RecordingTransport::echo());
        let body = json!({
            "zeta": {"b": 2, "a": 1},
            "alpha": [1, "two", 3.5, false, null],
            "mid": "é"
        });

        let echoed = client
            .send("/api/echo", HttpMethod::POST, &HashMap::new(), Some(&body))
            .unwrap();

        assert_eq!(echoed, body);
        assert_eq!(
            serde_json::to_string(&echoed).unwrap(),
            serde_json::to_string(&body).unwrap()
        );
    }

    #[test]
    fn test_top_level_endpoints() {
        let (client, transport) = test_client(RecordingTransport::with_body("{}"));

        client.overview().unwrap();
        client.whoami().unwrap();
        client.extensions().unwrap();
        client.definitions().unwrap();
        client.aliveness_test("/").unwrap();
        client.upload_definitions(&json!({"queues": []})).unwrap();

        let seen: Vec<(HttpMethod, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url.trim_start_matches("http://localhost:15672").to_string()))
            .collect();

        assert_eq!(
            seen,
            vec![
                (HttpMethod::GET, "/api/overview".to_string()),
                (HttpMethod::GET, "/api/whoami".to_string()),
                (HttpMethod::GET, "/api/extensions".to_string()),
                (HttpMethod::GET, "/api/definitions".to_string()),
                (HttpMethod::GET, "/api/aliveness-test/%2F".to_string()),
                (HttpMethod::POST, "/api/definitions".to_string()),
            ]
        );
    }
}
