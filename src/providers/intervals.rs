// ABOUTME: Intervals.icu API integration and activity fetching
// ABOUTME: Performs one authenticated list call per tool invocation and classifies failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Intervals.icu provider.
//!
//! Authenticates with HTTP Basic where the username is the literal `API_KEY`
//! and the password is the configured key. Each invocation issues exactly one
//! `GET /api/v1/athlete/{id}/activities` call bounded by the query window and
//! limit. Failure detail (status codes, body snippets, parse errors) is logged
//! here and never surfaced past the provider boundary.

use super::{ActivityProvider, ActivityQuery};
use crate::config::environment::ServerConfig;
use crate::constants::limits;
use crate::errors::{ProviderError, ProviderResult};
use crate::models::Activity;
use crate::providers::http_client::shared_client;
use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use tracing::{debug, error, warn};

/// HTTP Basic username required by the Intervals.icu API
const BASIC_AUTH_USERNAME: &str = "API_KEY";

/// Intervals.icu activity provider
#[derive(Debug, Clone)]
pub struct IntervalsProvider {
    client: Client,
    base_url: String,
    athlete_id: String,
    api_key: String,
}

impl IntervalsProvider {
    /// Create a provider bound to the configured athlete and credentials
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: config.intervals_base_url.clone(),
            athlete_id: config.athlete_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Absolute URL of the list-activities endpoint for this athlete
    fn activities_url(&self) -> String {
        format!(
            "{}/api/v1/athlete/{}/activities",
            self.base_url, self.athlete_id
        )
    }
}

#[async_trait]
impl ActivityProvider for IntervalsProvider {
    async fn get_activities(&self, query: &ActivityQuery) -> ProviderResult<Vec<Activity>> {
        let url = self.activities_url();
        debug!(
            oldest = %query.oldest,
            newest = %query.newest,
            limit = query.limit,
            "fetching activities from Intervals.icu"
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(BASIC_AUTH_USERNAME, Some(&self.api_key))
            .query(&[
                ("oldest", query.oldest.to_string()),
                ("newest", query.newest.to_string()),
                ("limit", query.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Unreachable { source })?;

        let status = response.status();
        if status != StatusCode::OK {
            // Body is read for the logs only; callers never see it.
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("failed reading upstream error body: {e}");
                String::new()
            });
            error!(
                status = status.as_u16(),
                body = %truncate_for_log(&body),
                "Intervals.icu returned an error status"
            );
            return Err(ProviderError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ProviderError::Read { source })?;

        let activities: Vec<Activity> = serde_json::from_str(&body).map_err(|source| {
            error!(
                body_len = body.len(),
                body = %truncate_for_log(&body),
                "failed to parse Intervals.icu activities response: {source}"
            );
            ProviderError::Parse { source }
        })?;

        debug!("parsed {} activities from Intervals.icu", activities.len());
        Ok(activities)
    }
}

/// Bound a response body snippet for log output
fn truncate_for_log(body: &str) -> String {
    body.chars()
        .take(limits::MAX_ERROR_BODY_LOG_BYTES)
        .collect()
}
