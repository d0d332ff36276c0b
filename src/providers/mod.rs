// ABOUTME: Fitness data provider abstractions and implementations
// ABOUTME: Core provider trait, bounded activity query, and the Intervals.icu client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Fitness data provider implementations and core abstractions.
//!
//! One provider exists today (Intervals.icu); the [`ActivityProvider`] trait
//! is the seam new providers implement.

/// Shared HTTP client for provider API calls
pub mod http_client;
/// Intervals.icu API provider implementation
pub mod intervals;

pub use intervals::IntervalsProvider;

use crate::errors::ProviderResult;
use crate::models::Activity;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Validated query for a bounded window of activities.
///
/// Constructed per request by the argument resolver, consumed once by a
/// provider, never persisted. Invariant: `oldest <= newest` and
/// `limit` within the advertised schema bounds - the resolver guarantees both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Inclusive window start date
    pub oldest: NaiveDate,
    /// Inclusive window end date
    pub newest: NaiveDate,
    /// Maximum number of activities to return
    pub limit: u32,
}

/// Core trait implemented by upstream fitness data sources.
///
/// Exactly one upstream call per invocation; no retries, no caching.
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// List activities inside the query window, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns a classified [`crate::errors::ProviderError`] when the upstream
    /// call fails at the transport, status, body-read, or parse stage.
    async fn get_activities(&self, query: &ActivityQuery) -> ProviderResult<Vec<Activity>>;
}
