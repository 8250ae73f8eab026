//! Integration tests for the reqwest transport.
//!
//! These tests run the transport, and a dispatcher built on it, against a
//! local mock server to verify what actually goes over the wire.

use std::collections::HashMap;

use graphql_dispatch::{
    Dispatcher, GraphqlError, HttpMethod, HttpRequest, MemoryCache, ReqwestTransport, TokenError,
    Transport,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher_for(server: &MockServer) -> Dispatcher {
    Dispatcher::builder()
        .transport(ReqwestTransport::new().unwrap())
        .url(format!("{}/graphql", server.uri()))
        .cache(MemoryCache::new())
        .token_async_fn(|| async { Ok::<_, TokenError>("abc".to_string()) })
        .build()
        .map(Dispatcher::new)
        .unwrap()
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_transport_posts_body_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(header("x-tenant", "acme"))
        .and(body_json(json!({ "query": "{ ping }" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "ping": "pong" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let request = HttpRequest::new(
        HttpMethod::Post,
        HashMap::from([
            ("content-type".to_string(), "application/json".to_string()),
            ("x-tenant".to_string(), "acme".to_string()),
        ]),
        r#"{"query":"{ ping }"}"#,
    );

    let response = transport
        .send(&format!("{}/graphql", server.uri()), request)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.json().unwrap(), json!({ "data": { "ping": "pong" } }));
}

#[tokio::test]
async fn test_transport_returns_non_success_responses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let request = HttpRequest::new(HttpMethod::Post, HashMap::new(), "{}");

    let response = transport.send(&server.uri(), request).await.unwrap();

    assert_eq!(response.code, 500);
    assert_eq!(response.body, "oops");
}

#[tokio::test]
async fn test_transport_connection_failure_is_network_error() {
    // Nothing listens on port 1
    let url = "http://127.0.0.1:1/graphql";
    let transport = ReqwestTransport::new().unwrap();
    let request = HttpRequest::new(HttpMethod::Post, HashMap::new(), "{}");

    let error = transport.send(url, request).await.unwrap_err();

    assert!(matches!(error, graphql_dispatch::TransportError::Network(_)));
}

// ============================================================================
// Dispatcher over HTTP
// ============================================================================

#[tokio::test]
async fn test_dispatcher_sends_authorized_request_and_caches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer abc"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "query GetUser($id: String!) { user(id: $id) { id } }",
            "variables": { "id": "3" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "user": { "id": "3" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);
    let query = "query GetUser($id: String!) { user(id: $id) { id } }";

    let first = dispatcher.query(query, Some(json!({ "id": "3" }))).await.unwrap();
    let second = dispatcher.query(query, Some(json!({ "id": "3" }))).await.unwrap();

    assert_eq!(first["user"]["id"], "3");
    assert_eq!(first, second);
    // expect(1) is verified when the server drops
}

#[tokio::test]
async fn test_dispatcher_surfaces_upstream_errors_from_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "errors": [{ "message": "Not authorized" }] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);

    for _ in 0..2 {
        let error = dispatcher.query("{ secret }", None).await.unwrap_err();
        assert_eq!(
            error.upstream_errors(),
            Some(&json!([{ "message": "Not authorized" }]))
        );
    }
}

#[tokio::test]
async fn test_dispatcher_reports_html_error_page_as_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);

    let error = dispatcher.query("{ ping }", None).await.unwrap_err();

    assert!(matches!(error, GraphqlError::Decode(_)));
}
