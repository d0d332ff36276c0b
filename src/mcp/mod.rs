// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: JSON-RPC protocol handling, tool dispatch, and the Streamable HTTP endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod http_transport;
pub mod protocol;
pub mod resources;
pub mod schema;
pub mod tool_handlers;
pub mod tool_params;
