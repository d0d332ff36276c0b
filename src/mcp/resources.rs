// ABOUTME: Shared server resources injected into the protocol layer
// ABOUTME: Immutable configuration and the activity provider behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Dependency container for the request path.
//!
//! Everything request handlers need lives here behind a single `Arc`:
//! the immutable [`ServerConfig`] and the activity provider. There is no
//! other shared state, so no locks are required anywhere in the server.

use crate::config::environment::ServerConfig;
use crate::providers::{ActivityProvider, IntervalsProvider};
use std::sync::Arc;

/// Shared resources for the MCP server
pub struct ServerResources {
    /// Immutable configuration loaded at startup
    pub config: ServerConfig,
    /// Upstream activity provider
    pub provider: Arc<dyn ActivityProvider>,
}

impl ServerResources {
    /// Build resources with the production Intervals.icu provider
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let provider = Arc::new(IntervalsProvider::new(&config));
        Self { config, provider }
    }

    /// Build resources with an injected provider (used by tests)
    #[must_use]
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn ActivityProvider>) -> Self {
        Self { config, provider }
    }
}
