// ABOUTME: Tool execution handlers for MCP tools/call requests
// ABOUTME: Orchestrates argument resolution, the upstream call, and result formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tool dispatch and the `get_activities` pipeline.
//!
//! The pipeline is strictly sequential: resolve arguments, call upstream,
//! format. No stage is retried; a failure at any stage terminates the
//! pipeline and produces a single tool error result with a stage-appropriate,
//! non-leaking message. Upstream diagnostic detail stays in the logs.

use super::protocol::{McpRequest, McpResponse};
use super::resources::ServerResources;
use super::schema::ToolResponse;
use super::tool_params::resolve_activity_query;
use crate::constants::errors::{ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, MSG_ACTIVITIES_FAILED};
use crate::constants::tools;
use crate::errors::ProviderError;
use crate::formatters::format_activities;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Default ID for error responses that don't have a request ID
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

/// Tool execution handlers for MCP protocol
pub struct ToolHandlers;

impl ToolHandlers {
    /// Handle a `tools/call` request by routing on the tool name
    #[tracing::instrument(
        skip(request, resources),
        fields(request_id = ?request.id, tool_name = tracing::field::Empty)
    )]
    pub async fn handle_tools_call(
        request: McpRequest,
        resources: &Arc<ServerResources>,
    ) -> McpResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);

        let Some(params) = request.params.as_ref() else {
            return McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                "Missing parameters".to_owned(),
            );
        };
        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                "Missing tool name".to_owned(),
            );
        };
        tracing::Span::current().record("tool_name", tool_name);

        match tool_name {
            tools::GET_ACTIVITIES => {
                let started = Instant::now();
                let tool_response =
                    Self::handle_get_activities(params.get("arguments"), resources).await;
                info!(
                    duration_ms = started.elapsed().as_millis() as u64,
                    is_error = tool_response.is_error,
                    "get_activities completed"
                );
                match serde_json::to_value(&tool_response) {
                    Ok(result) => McpResponse::success(request_id, result),
                    Err(_) => McpResponse::error(
                        request_id,
                        ERROR_INTERNAL_ERROR,
                        "Internal error".to_owned(),
                    ),
                }
            }
            unknown => McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                format!("Unknown tool: {unknown}"),
            ),
        }
    }

    /// Run the resolve -> fetch -> format pipeline for `get_activities`
    async fn handle_get_activities(
        arguments: Option<&Value>,
        resources: &Arc<ServerResources>,
    ) -> ToolResponse {
        let query = resolve_activity_query(arguments);
        info!(
            oldest = %query.oldest,
            newest = %query.newest,
            limit = query.limit,
            "resolved get_activities query"
        );

        match resources.provider.get_activities(&query).await {
            Ok(activities) => ToolResponse::text(format_activities(&activities)),
            Err(err) => {
                error!("get_activities failed: {err}");
                ToolResponse::error(tool_error_message(&err))
            }
        }
    }
}

/// Map a provider failure onto its caller-visible message.
///
/// The status code is the only upstream detail that crosses the tool
/// boundary; bodies and error sources never do.
fn tool_error_message(err: &ProviderError) -> String {
    match err {
        ProviderError::Unreachable { .. } => MSG_ACTIVITIES_FAILED.to_owned(),
        ProviderError::Status { status } => {
            format!("{MSG_ACTIVITIES_FAILED} Status code {}", status.as_u16())
        }
        ProviderError::Read { .. } => {
            format!("{MSG_ACTIVITIES_FAILED} Reading response failed.")
        }
        ProviderError::Parse { .. } => {
            format!("{MSG_ACTIVITIES_FAILED} Parsing response failed.")
        }
    }
}
