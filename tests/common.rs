//! Shared helpers for integration tests: canned configuration, sample
//! activities, and stub providers for exercising the tool pipeline without
//! a network.

#![allow(dead_code)]

use async_trait::async_trait;
use intervals_mcp_server::config::environment::ServerConfig;
use intervals_mcp_server::errors::{ProviderError, ProviderResult};
use intervals_mcp_server::models::Activity;
use intervals_mcp_server::providers::{ActivityProvider, ActivityQuery};

/// Inbound auth token used by transport tests (>= 20 chars)
pub const TEST_AUTH_TOKEN: &str = "test-token-0123456789abcdef";

/// Configuration pointing at production defaults with test credentials
pub fn test_config() -> ServerConfig {
    ServerConfig {
        intervals_base_url: "https://intervals.icu".into(),
        athlete_id: "i12345".into(),
        api_key: "test_api_key".into(),
        mcp_auth_token: TEST_AUTH_TOKEN.into(),
        http_port: 0,
    }
}

/// A fully populated activity that renders without gaps
pub fn sample_activity() -> Activity {
    Activity {
        id: Some("i1".into()),
        name: Some("Morning Ride".into()),
        start_date_local: Some("2024-07-14T06:30:00".into()),
        activity_type: Some("Ride".into()),
        moving_time: Some(3725),
        distance: Some(10500.0),
        average_heartrate: Some(142.0),
        training_load: Some(118),
    }
}

/// Provider stub returning a fixed activity list
pub struct StaticProvider {
    pub activities: Vec<Activity>,
}

#[async_trait]
impl ActivityProvider for StaticProvider {
    async fn get_activities(&self, _query: &ActivityQuery) -> ProviderResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }
}

/// Provider stub failing with a fixed upstream status
pub struct FailingProvider {
    pub status: http::StatusCode,
}

#[async_trait]
impl ActivityProvider for FailingProvider {
    async fn get_activities(&self, _query: &ActivityQuery) -> ProviderResult<Vec<Activity>> {
        Err(ProviderError::Status {
            status: self.status,
        })
    }
}
