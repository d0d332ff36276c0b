// ABOUTME: Streamable HTTP transport for the MCP endpoint plus the health route
// ABOUTME: Routes JSON-RPC messages to protocol handlers behind the bearer gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Streamable HTTP transport.
//!
//! One path serves both protocol interactions: `POST` carries JSON-RPC
//! messages, `GET` opens the SSE stream (kept alive with comments; this
//! server never pushes server-initiated messages). Both are behind the
//! bearer gate. `GET /health` is the only unauthenticated route.
//!
//! Each request runs as its own task; the only shared state is the immutable
//! [`ServerResources`] behind an `Arc`. A dropped inbound connection drops
//! the handler future, abandoning any in-flight upstream call with it.

use super::protocol::{McpRequest, McpResponse, ProtocolHandler};
use super::resources::ServerResources;
use super::tool_handlers::ToolHandlers;
use crate::constants::errors::{ERROR_INVALID_REQUEST, ERROR_PARSE};
use crate::constants::protocol::{HEALTH_ENDPOINT_PATH, MCP_ENDPOINT_PATH};
use crate::middleware::auth::{require_bearer, BearerToken};
use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use futures_util::stream::{self, Pending};
use http::StatusCode;
use serde_json::Value;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Interval between SSE keep-alive comments
const SSE_KEEP_ALIVE_SECS: u64 = 15;

/// Assemble the application router with the bearer gate on the MCP endpoint
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let gate = BearerToken::new(&resources.config.mcp_auth_token);

    let mcp_routes = Router::new()
        .route(MCP_ENDPOINT_PATH, post(mcp_post).get(mcp_get))
        .route_layer(middleware::from_fn_with_state(gate, require_bearer));

    Router::new()
        .merge(mcp_routes)
        .route(HEALTH_ENDPOINT_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(resources)
}

/// Bind the listener and serve until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails while running.
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Streamable HTTP MCP server listening on {addr}{MCP_ENDPOINT_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutdown signal received");
}

/// Handle one JSON-RPC message on the MCP endpoint
async fn mcp_post(State(resources): State<Arc<ServerResources>>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            let response =
                McpResponse::error(Value::Null, ERROR_PARSE, "Parse error".to_owned());
            return (StatusCode::OK, Json(response)).into_response();
        }
    };

    let request: McpRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(_) => {
            let response = McpResponse::error(
                Value::Null,
                ERROR_INVALID_REQUEST,
                "Invalid Request".to_owned(),
            );
            return (StatusCode::OK, Json(response)).into_response();
        }
    };

    // Notifications carry no ID and expect no body.
    if request.is_notification() {
        debug!(method = %request.method, "acknowledged notification");
        return StatusCode::ACCEPTED.into_response();
    }

    let response = dispatch(request, &resources).await;
    (StatusCode::OK, Json(response)).into_response()
}

/// Route one request envelope to its protocol handler
async fn dispatch(request: McpRequest, resources: &Arc<ServerResources>) -> McpResponse {
    if request.method == "tools/call" {
        return ToolHandlers::handle_tools_call(request, resources).await;
    }

    match request.method.as_str() {
        "initialize" => ProtocolHandler::handle_initialize(&request),
        "ping" => ProtocolHandler::handle_ping(&request),
        "tools/list" => ProtocolHandler::handle_tools_list(&request),
        "prompts/list" => ProtocolHandler::handle_prompts_list(&request),
        "resources/list" => ProtocolHandler::handle_resources_list(&request),
        _ => ProtocolHandler::handle_unknown_method(&request),
    }
}

/// Open the SSE stream of the Streamable HTTP transport.
///
/// The stream itself stays silent; the keep-alive comments are the only
/// traffic, since this server never pushes server-initiated messages.
async fn mcp_get() -> Sse<Pending<Result<Event, Infallible>>> {
    Sse::new(stream::pending()).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(SSE_KEEP_ALIVE_SECS))
            .text("keep-alive"),
    )
}

/// Unauthenticated health probe
async fn health() -> &'static str {
    "OK"
}
