//! Transport-level behavior of the reqwest-backed client.

use super::client_for;
use rabbitmq_management::executor::RequestError;
use rabbitmq_management::{Client, ClientConfig, Error, HttpMethod};
use serde_json::{json, Value};
use std::collections::HashMap;

#[test]
fn test_connection_refused_is_network_error() {
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(2000);
    let client = Client::new(config).unwrap();

    match client.overview() {
        Err(Error::Network(err)) => assert!(!matches!(err, RequestError::InvalidUrl(_))),
        other => panic!("Expected network error, got {:?}", other),
    }
}

#[test]
fn test_non_json_body_is_decode_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/overview")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create();
    let client = client_for(&server);

    match client.overview() {
        Err(Error::Decode { status_code, .. }) => assert_eq!(status_code, 502),
        other => panic!("Expected decode error, got {:?}", other),
    }
}

#[test]
fn test_no_content_decodes_to_null() {
    let mut server = mockito::Server::new();
    server
        .mock("DELETE", "/api/queues/%2F/orders/contents")
        .with_status(204)
        .create();
    let client = client_for(&server);

    assert_eq!(client.queues().purge("/", "orders").unwrap(), Value::Null);
}

#[test]
fn test_execute_exposes_status_and_headers() {
    let mut server = mockito::Server::new();
    server
        .mock("PUT", "/api/vhosts/dev")
        .with_status(201)
        .with_header("location", "/api/vhosts/dev")
        .create();
    let client = client_for(&server);

    let response = client
        .execute("/api/vhosts/dev", HttpMethod::PUT, &HashMap::new(), None)
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert!(response.is_success());
    assert_eq!(response.location(), Some("/api/vhosts/dev"));
    assert_eq!(response.body, Value::Null);
}

#[test]
fn test_send_with_custom_headers_and_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/definitions")
        .match_header("x-request-id", "42")
        .match_header("accept", "application/json")
        .match_body(mockito::Matcher::Json(json!({"queues": []})))
        .with_status(200)
        .with_body("{}")
        .create();
    let client = client_for(&server);
    let mut headers = HashMap::new();
    headers.insert("X-Request-Id".to_string(), "42".to_string());

    let body = client
        .send(
            "/api/definitions",
            HttpMethod::POST,
            &headers,
            Some(&json!({"queues": []})),
        )
        .unwrap();

    mock.assert();
    assert_eq!(body, json!({}));
}

#[test]
fn test_custom_credentials() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/whoami")
        .match_header("authorization", "Basic YWRtaW46czNjcjN0")
        .with_status(200)
        .with_body(r#"{"name":"admin","tags":["administrator"]}"#)
        .create();
    let config = ClientConfig::default()
        .with_base_url(server.url())
        .with_credentials("admin", "s3cr3t");
    let client = Client::new(config).unwrap();

    let me = client.whoami().unwrap();

    mock.assert();
    assert_eq!(me["name"], "admin");
}
