//! Definitions missing mandatory keys never reach the server.

use super::client_for;
use rabbitmq_management::Error;
use serde_json::json;

fn assert_invalid(result: Result<serde_json::Value, Error>, key: &str) {
    match result {
        Err(Error::InvalidInput(msg)) => assert!(
            msg.contains(key),
            "Expected message naming '{}', got: {}",
            key,
            msg
        ),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_invalid_definitions_send_nothing() {
    let mut server = mockito::Server::new();
    let any = server
        .mock("PUT", mockito::Matcher::Any)
        .expect(0)
        .create();
    let client = client_for(&server);

    assert_invalid(
        client.exchanges().create("/", "x", json!({"durable": true})),
        "type",
    );
    assert_invalid(
        client
            .permissions()
            .create("/", "guest", json!({"configure": ".*", "write": ".*"})),
        "read",
    );
    assert_invalid(
        client.policies().create("/", "p", json!({"pattern": ".*"})),
        "definition",
    );
    assert_invalid(
        client.parameters().create("shovel", "/", "s", json!({})),
        "value",
    );
    assert_invalid(client.users().create("u", json!({"password": "pw"})), "tags");

    any.assert();
}

#[test]
fn test_publish_requires_every_message_field() {
    let mut server = mockito::Server::new();
    let publish = server
        .mock("POST", "/api/exchanges/%2F/amq.default/publish")
        .expect(0)
        .create();
    let client = client_for(&server);

    let complete = json!({
        "properties": {},
        "routing_key": "rk",
        "payload": "body",
        "payload_encoding": "string"
    });
    for key in ["properties", "routing_key", "payload", "payload_encoding"] {
        let mut message = complete.clone();
        message.as_object_mut().unwrap().remove(key);
        assert_invalid(client.exchanges().publish("/", "amq.default", message), key);
    }

    publish.assert();
}

#[test]
fn test_exchange_with_type_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/api/exchanges/%2F/events")
        .match_body(mockito::Matcher::Json(json!({"type": "fanout"})))
        .with_status(201)
        .create();
    let client = client_for(&server);

    client
        .exchanges()
        .create("/", "events", json!({"type": "fanout"}))
        .unwrap();

    mock.assert();
}
