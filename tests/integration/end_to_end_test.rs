//! End-to-end tests: facade call, HTTP exchange, decoded body.

use super::{client_for, GUEST_AUTH};
use mockito::Matcher;
use rabbitmq_management::{ExchangeDefinition, PublishMessage, QueueDefinition};
use serde_json::{json, Map, Value};

#[test]
fn test_list_queues_in_default_vhost() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/queues/%2F")
        .match_header("authorization", GUEST_AUTH)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name":"orders","vhost":"/","messages":3}]"#)
        .create();

    let client = client_for(&server);
    let queues = client.queues().all(Some("/")).unwrap();

    mock.assert();
    assert_eq!(queues, json!([{"name": "orders", "vhost": "/", "messages": 3}]));
}

#[test]
fn test_create_binding_posts_routing_key_and_arguments() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/bindings/%2F/e/amq.direct/q/myqueue")
        .match_body(Matcher::Json(json!({"routing_key": "rk", "arguments": {"x": 1}})))
        .with_status(201)
        .with_header("location", "%2F/e/amq.direct/q/myqueue/rk")
        .create();

    let client = client_for(&server);
    let mut arguments = Map::new();
    arguments.insert("x".to_string(), json!(1));
    let result = client
        .bindings()
        .create("/", "amq.direct", "myqueue", "rk", Some(arguments))
        .unwrap();

    mock.assert();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_create_vhost_sends_put_without_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/api/vhosts/test")
        .match_body("")
        .with_status(201)
        .create();

    let client = client_for(&server);
    let result = client.vhosts().create("test").unwrap();

    mock.assert();
    assert_eq!(result, Value::Null);
}

#[test]
fn test_declare_publish_and_get_messages() {
    let mut server = mockito::Server::new();
    let exchange = server
        .mock("PUT", "/api/exchanges/staging/orders")
        .match_body(Matcher::Json(json!({"type": "topic", "durable": true})))
        .with_status(201)
        .create();
    let queue = server
        .mock("PUT", "/api/queues/staging/orders.eu")
        .match_body(Matcher::Json(json!({"durable": true})))
        .with_status(201)
        .create();
    let publish = server
        .mock("POST", "/api/exchanges/staging/orders/publish")
        .match_body(Matcher::Json(json!({
            "properties": {},
            "routing_key": "eu.fr",
            "payload": "hello",
            "payload_encoding": "string"
        })))
        .with_status(200)
        .with_body(r#"{"routed":true}"#)
        .create();
    let get = server
        .mock("POST", "/api/queues/staging/orders.eu/get")
        .match_body(Matcher::Json(json!({"count": 5, "requeue": true, "encoding": "auto"})))
        .with_status(200)
        .with_body(r#"[{"payload":"hello","payload_encoding":"string","redelivered":false}]"#)
        .create();

    let client = client_for(&server);
    client
        .exchanges()
        .create("staging", "orders", ExchangeDefinition::new("topic").durable(true))
        .unwrap();
    client
        .queues()
        .create("staging", "orders.eu", QueueDefinition::new().durable(true))
        .unwrap();
    let routed = client
        .exchanges()
        .publish("staging", "orders", PublishMessage::text("eu.fr", "hello"))
        .unwrap();
    let messages = client
        .queues()
        .get_messages("staging", "orders.eu", rabbitmq_management::GetMessagesRequest::default())
        .unwrap();

    exchange.assert();
    queue.assert();
    publish.assert();
    get.assert();
    assert_eq!(routed, json!({"routed": true}));
    assert_eq!(messages[0]["payload"], "hello");
}

#[test]
fn test_node_memory_query() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/nodes/rabbit%40localhost")
        .match_query(Matcher::UrlEncoded("memory".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"name":"rabbit@localhost","memory":{"total":1024}}"#)
        .create();

    let client = client_for(&server);
    let node = client.nodes().get("rabbit@localhost", true).unwrap();

    mock.assert();
    assert_eq!(node["memory"]["total"], 1024);
}

#[test]
fn test_not_found_is_returned_as_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/queues/%2F/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Object Not Found","reason":"Not Found"}"#)
        .create();

    let client = client_for(&server);
    let body = client.queues().get("/", "missing").unwrap();

    mock.assert();
    assert_eq!(body["error"], "Object Not Found");
}

#[test]
fn test_response_key_order_is_preserved() {
    let mut server = mockito::Server::new();
    let body = r#"{"zeta":1,"alpha":{"y":2,"b":3},"mid":[1,2]}"#;
    server
        .mock("GET", "/api/overview")
        .with_status(200)
        .with_body(body)
        .create();

    let client = client_for(&server);
    let overview = client.overview().unwrap();

    assert_eq!(serde_json::to_string(&overview).unwrap(), body);
}
