//! Streamable HTTP Transport Tests
//!
//! Envelope handling on the wire: parse errors, invalid requests,
//! notification acknowledgement, the SSE establish interaction, and the
//! full tools/call happy path over HTTP.

mod common;

use anyhow::{anyhow, Result};
use axum::body::Body;
use common::{sample_activity, test_config, StaticProvider, TEST_AUTH_TOKEN};
use http::header::AUTHORIZATION;
use http::{Request, StatusCode};
use intervals_mcp_server::mcp::http_transport::router;
use intervals_mcp_server::mcp::resources::ServerResources;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router wired to a stub provider returning one activity
fn test_router() -> axum::Router {
    let resources = Arc::new(ServerResources::with_provider(
        test_config(),
        Arc::new(StaticProvider {
            activities: vec![sample_activity()],
        }),
    ));
    router(resources)
}

/// Authorized POST to the MCP endpoint with the given raw body
fn authorized_post(body: &str) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .header(AUTHORIZATION, format!("Bearer {TEST_AUTH_TOKEN}"))
        .body(Body::from(body.to_owned()))?)
}

/// Collect a JSON response body
async fn json_body(response: axum::response::Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_malformed_json_yields_parse_error() -> Result<()> {
    let response = test_router().oneshot(authorized_post("{not json")?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await?;
    assert_eq!(payload["error"]["code"], -32700);
    assert_eq!(payload["id"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_non_request_shape_yields_invalid_request() -> Result<()> {
    let response = test_router()
        .oneshot(authorized_post(r#"{"id": 1}"#)?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await?;
    assert_eq!(payload["error"]["code"], -32600);
    Ok(())
}

#[tokio::test]
async fn test_notification_is_acknowledged_without_body() -> Result<()> {
    let response = test_router()
        .oneshot(authorized_post(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await?;
    assert!(bytes.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_tools_call_happy_path_over_http() -> Result<()> {
    let body = r#"{"jsonrpc":"2.0","method":"tools/call","id":42,
        "params":{"name":"get_activities","arguments":{"limit":5}}}"#;
    let response = test_router().oneshot(authorized_post(body)?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await?;
    assert_eq!(payload["id"], 42);
    assert_eq!(payload["result"]["isError"], false);
    let text = payload["result"]["content"][0]["text"]
        .as_str()
        .ok_or_else(|| anyhow!("missing text content"))?;
    assert!(text.contains("Morning Ride"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_method_over_http() -> Result<()> {
    let response = test_router()
        .oneshot(authorized_post(
            r#"{"jsonrpc":"2.0","method":"tools/install","id":2}"#,
        )?)
        .await?;

    let payload = json_body(response).await?;
    assert_eq!(payload["error"]["code"], -32601);
    Ok(())
}

#[tokio::test]
async fn test_get_establishes_event_stream() -> Result<()> {
    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .header(AUTHORIZATION, format!("Bearer {TEST_AUTH_TOKEN}"))
        .body(Body::empty())?;
    let response = test_router().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/event-stream"));
    Ok(())
}
