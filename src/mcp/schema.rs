// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Type-safe tool schemas and capability declarations for protocol compliance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP capabilities, tool schemas, and tool results.
//! Keeping the schema in code (rather than hardcoded JSON) ensures protocol
//! compliance and makes the advertised contract easy to modify.

use crate::constants::{defaults, json_fields, limits, tools};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Advertised server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name used in `tools/call`
    pub name: String,
    /// Human-readable tool description
    pub description: String,
    /// JSON Schema of the tool arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always `object` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named argument schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// String format hint (e.g. `date`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Default value applied when the property is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Inclusive maximum for numeric properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u32>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Ordered content blocks
    pub content: Vec<Content>,
    /// Whether this result represents a tool-level failure
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Successful text result
    #[must_use]
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: false,
        }
    }

    /// Tool-level error result with a short, non-leaking message
    #[must_use]
    pub fn error(message: String) -> Self {
        Self {
            content: vec![Content::Text { text: message }],
            is_error: true,
        }
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content block
    #[serde(rename = "text")]
    Text {
        /// The text payload
        text: String,
    },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change during a session
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Response payload of the `initialize` method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Negotiated protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identity
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
    /// Usage instructions surfaced to the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response with current server configuration
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            instructions: Some(
                "This server provides activity summaries from Intervals.icu. \
                 Use `get_activities` with an optional date window and limit."
                    .into(),
            ),
        }
    }
}

/// Get all available tools (public interface for tests)
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    vec![create_get_activities_tool()]
}

/// Create the `get_activities` tool schema
fn create_get_activities_tool() -> ToolSchema {
    let mut properties = HashMap::new();

    properties.insert(
        json_fields::START_DATE.to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("Start date to list activities from in YYYY-MM-DD format".into()),
            format: Some("date".into()),
            default: None,
            maximum: None,
        },
    );

    properties.insert(
        json_fields::END_DATE.to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("End date to list activities from in YYYY-MM-DD format".into()),
            format: Some("date".into()),
            default: None,
            maximum: None,
        },
    );

    properties.insert(
        json_fields::LIMIT.to_owned(),
        PropertySchema {
            property_type: "integer".into(),
            description: Some("Maximum number of activities".into()),
            format: None,
            default: Some(json!(defaults::ACTIVITY_LIMIT)),
            maximum: Some(limits::MAX_ACTIVITY_LIMIT),
        },
    );

    ToolSchema {
        name: tools::GET_ACTIVITIES.to_owned(),
        description: "Get a list of activities from Intervals.icu".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: None,
        },
    }
}
