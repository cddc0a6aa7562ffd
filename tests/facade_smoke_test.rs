//! End-to-end smoke test through the `callr` facade crate

use callr::{CallrClient, Error};
use httpmock::prelude::*;
use serde_json::json;

fn init_logging() {
    // Default TracingSink events become visible with RUST_LOG=callr=info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
async fn facade_exposes_the_full_call_path() {
    init_logging();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("authorization", "Api-Key facade-key");
        then.status(200)
            .json_body(json!({"id": 3, "jsonrpc": "2.0", "result": {"status": "ok"}}));
    });

    let mut api = CallrClient::with_api_key("facade-key");
    api.set_url(server.url("/"));

    let result = api.call("system.ping", vec![]).await.unwrap();
    assert_eq!(result, json!({"status": "ok"}));
    mock.assert();
}

#[tokio::test]
async fn facade_surfaces_remote_errors_as_typed_values() {
    init_logging();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({
            "id": 3,
            "jsonrpc": "2.0",
            "error": {"code": 4001, "message": "invalid destination", "data": {"field": "to"}}
        }));
    });

    let mut api = CallrClient::with_basic_auth("login", "password");
    api.set_url(server.url("/"));

    match api.call("sms.send", vec![json!("SMS")]).await {
        Err(Error::Rpc(e)) => {
            assert_eq!(e.code, 4001);
            assert_eq!(e.message, "invalid destination");
            assert_eq!(e.data, Some(json!({"field": "to"})));
        }
        other => panic!("expected Rpc error, got {:?}", other),
    }
}
