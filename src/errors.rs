// ABOUTME: Unified error types for configuration validation and upstream API failures
// ABOUTME: Classifies provider outcomes so callers can log detail without leaking it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! Two error families live here: [`ConfigError`] aborts startup before the
//! listener binds, and [`ProviderError`] classifies every way a single
//! upstream call can fail. Provider errors carry full diagnostic detail for
//! the logs; the MCP tool boundary converts them into generic, non-leaking
//! messages.

use thiserror::Error;

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Startup configuration failures - the process must not serve with these
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required secret is missing or below its minimum length
    #[error("{var} must be configured with at least {min} characters")]
    SecretTooShort {
        /// Environment variable name
        var: &'static str,
        /// Minimum accepted length
        min: usize,
    },

    /// A configuration value failed to parse
    #[error("invalid {var} value: {message}")]
    Invalid {
        /// Environment variable name
        var: &'static str,
        /// Parse failure description
        message: String,
    },
}

/// Classified failures of a single upstream API call.
///
/// Exactly one variant applies per call; nothing is retried. The `Display`
/// output is for logging only and must never be returned to an MCP caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure: connection refused, timeout, DNS
    #[error("upstream API unreachable: {source}")]
    Unreachable {
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-200 status
    #[error("upstream API returned status {status}")]
    Status {
        /// The HTTP status code received
        status: http::StatusCode,
    },

    /// The 200 response body could not be read
    #[error("failed reading upstream response body: {source}")]
    Read {
        /// Underlying body read error
        #[source]
        source: reqwest::Error,
    },

    /// The 200 response body was not the expected JSON shape
    #[error("failed parsing upstream response body: {source}")]
    Parse {
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
