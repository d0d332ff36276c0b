// ABOUTME: MCP protocol message envelopes and core protocol operation handlers
// ABOUTME: Handles initialize, ping, tools/list, and unknown-method responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # MCP Protocol Handlers
//!
//! JSON-RPC 2.0 envelope types plus handlers for the core protocol methods.
//! Tool execution lives in [`super::tool_handlers`]; everything here is pure
//! request-to-response mapping with no I/O.

use crate::constants::errors::{ERROR_METHOD_NOT_FOUND, MSG_METHOD_NOT_FOUND};
use crate::constants::protocol::{
    mcp_protocol_version, server_name, JSONRPC_VERSION, SERVER_VERSION,
};
use crate::mcp::schema::{get_tools, InitializeResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default ID for error responses that don't have a request ID
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

/// JSON-RPC request envelope
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version marker
    pub jsonrpc: String,
    /// Method name (`initialize`, `tools/call`, ...)
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Option<Value>,
    /// Optional ID - notifications don't have IDs, only regular requests do
    #[serde(default)]
    pub id: Option<Value>,
}

impl McpRequest {
    /// True when this envelope is a notification (no response expected)
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Serialize)]
pub struct McpResponse {
    /// JSON-RPC version marker
    pub jsonrpc: String,
    /// Successful result payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Mirrors the request ID
    pub id: Value,
}

/// JSON-RPC error payload
#[derive(Debug, Serialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Short error message
    pub message: String,
}

impl McpResponse {
    /// Create a successful MCP response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error MCP response
    #[must_use]
    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(McpError { code, message }),
            id,
        }
    }
}

/// MCP protocol handlers
pub struct ProtocolHandler;

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &McpRequest) -> McpResponse {
        let init_response = InitializeResponse::new(
            mcp_protocol_version(),
            server_name(),
            SERVER_VERSION.to_owned(),
        );

        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        match serde_json::to_value(&init_response) {
            Ok(result) => McpResponse::success(request_id, result),
            Err(_) => McpResponse::error(request_id, -32603, "Internal error".to_owned()),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: &McpRequest) -> McpResponse {
        let tools = get_tools();

        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "tools": tools }))
    }

    /// Handle prompts list request
    #[must_use]
    pub fn handle_prompts_list(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "prompts": [] }))
    }

    /// Handle resources list request
    #[must_use]
    pub fn handle_resources_list(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "resources": [] }))
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &McpRequest) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        McpResponse::error(
            request_id,
            ERROR_METHOD_NOT_FOUND,
            format!("{MSG_METHOD_NOT_FOUND}: {}", request.method),
        )
    }
}
