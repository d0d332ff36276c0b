// ABOUTME: Main library entry point for the Intervals.icu MCP server
// ABOUTME: Exposes bearer-gated fitness activity summaries over the MCP Streamable HTTP transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Intervals.icu MCP Server
//!
//! A Model Context Protocol (MCP) server exposing a single `get_activities`
//! tool backed by the Intervals.icu API. Activities for a bounded date window
//! are fetched upstream and rendered into a compact one-line-per-activity
//! summary suitable for LLM consumption.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven configuration with fail-fast validation
//! - **Providers**: the Intervals.icu client behind the `ActivityProvider` seam
//! - **MCP**: JSON-RPC protocol handling and the Streamable HTTP endpoint
//! - **Formatters**: activity-to-text rendering
//! - **Middleware**: bearer token access gate for the MCP endpoint
//!
//! Every inbound protocol request must carry `Authorization: Bearer <token>`
//! matching the configured token exactly; the health route is the only
//! unauthenticated surface.

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Configuration management from environment variables
pub mod config;

/// Application-wide constants (protocol, defaults, environment names)
pub mod constants;

/// Unified error types for configuration and upstream failures
pub mod errors;

/// Activity-to-text rendering for tool results
pub mod formatters;

/// Logging configuration and structured logging setup
pub mod logging;

/// Model Context Protocol implementation and HTTP transport
pub mod mcp;

/// Bearer token access gate middleware
pub mod middleware;

/// Common data structures for upstream fitness data
pub mod models;

/// Fitness data provider implementations
pub mod providers;
