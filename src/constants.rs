// ABOUTME: Application-wide constants for protocol, defaults, limits, and environment names
// ABOUTME: Provides environment-configurable protocol values with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Centralized constants so magic values never spread through the codebase.

/// Protocol constants for MCP and JSON-RPC
pub mod protocol {
    use std::env;

    /// Get MCP Protocol version from environment or default
    #[must_use]
    pub fn mcp_protocol_version() -> String {
        env::var("MCP_PROTOCOL_VERSION").unwrap_or_else(|_| "2025-06-18".into())
    }

    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Get server name from environment or default
    #[must_use]
    pub fn server_name() -> String {
        env::var("SERVER_NAME").unwrap_or_else(|_| "intervals-mcp-server".into())
    }

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Path of the single Streamable HTTP MCP endpoint
    pub const MCP_ENDPOINT_PATH: &str = "/mcp";

    /// Path of the unauthenticated health endpoint
    pub const HEALTH_ENDPOINT_PATH: &str = "/health";
}

/// Error codes for JSON-RPC and MCP protocols
pub mod errors {
    /// Parse error - malformed JSON payload
    pub const ERROR_PARSE: i32 = -32700;

    /// Invalid request - envelope is not a valid JSON-RPC request
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Common error messages
    pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";

    /// Generic tool failure message - upstream detail stays in the logs
    pub const MSG_ACTIVITIES_FAILED: &str = "Error getting activities.";
}

/// Tool names exposed through `tools/list`
pub mod tools {
    /// Fetch activities for a date window
    pub const GET_ACTIVITIES: &str = "get_activities";
}

/// JSON field names used in tool argument bags
pub mod json_fields {
    /// Window start date argument (`YYYY-MM-DD`)
    pub const START_DATE: &str = "start_date";

    /// Window end date argument (`YYYY-MM-DD`)
    pub const END_DATE: &str = "end_date";

    /// Maximum number of activities argument
    pub const LIMIT: &str = "limit";
}

/// Environment variable names read at startup
pub mod env_config {
    /// Upstream API base URL override
    pub const INTERVALS_API_BASE_URL: &str = "INTERVALS_API_BASE_URL";

    /// Intervals.icu athlete identifier
    pub const INTERVALS_ATHLETE_ID: &str = "INTERVALS_ATHLETE_ID";

    /// Intervals.icu API key
    pub const INTERVALS_API_KEY: &str = "INTERVALS_API_KEY";

    /// Shared secret required on every inbound MCP request
    pub const MCP_AUTH_TOKEN: &str = "MCP_AUTH_TOKEN";

    /// HTTP listen port
    pub const PORT: &str = "PORT";
}

/// Default configuration values
pub mod defaults {
    /// Production Intervals.icu host
    pub const INTERVALS_API_BASE_URL: &str = "https://intervals.icu";

    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8000;

    /// Default activity window length in calendar days
    pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

    /// Default number of activities returned by `get_activities`
    pub const ACTIVITY_LIMIT: u32 = 10;
}

/// Hard limits enforced locally
pub mod limits {
    /// Smallest accepted `limit` argument
    pub const MIN_ACTIVITY_LIMIT: u32 = 1;

    /// Largest accepted `limit` argument - the bound advertised in the tool schema
    pub const MAX_ACTIVITY_LIMIT: u32 = 100;

    /// Minimum length for the athlete ID and API key secrets
    pub const MIN_SECRET_LENGTH: usize = 4;

    /// Minimum length for the inbound auth token before regeneration kicks in
    pub const MIN_AUTH_TOKEN_LENGTH: usize = 20;

    /// Length of a generated auth token
    pub const GENERATED_AUTH_TOKEN_LENGTH: usize = 32;

    /// Largest upstream error body snippet written to the logs
    pub const MAX_ERROR_BODY_LOG_BYTES: usize = 500;
}
