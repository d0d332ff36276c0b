// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Validates secrets at startup and self-provisions a strong inbound auth token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management.
//!
//! The process must never serve with a weak or absent credential: the athlete
//! ID and API key are validated fail-fast, and a missing or short inbound auth
//! token is replaced by a generated 32-character alphanumeric token drawn from
//! a cryptographically secure source. Configuration is constructed once and
//! immutable for the process lifetime.

use crate::constants::{defaults, env_config, limits};
use crate::errors::ConfigError;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use std::env;
use std::fmt::Write;
use tracing::warn;

/// Immutable server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Intervals.icu API base URL, no trailing slash
    pub intervals_base_url: String,
    /// Intervals.icu athlete identifier
    pub athlete_id: String,
    /// Intervals.icu API key (HTTP Basic password, username `API_KEY`)
    pub api_key: String,
    /// Shared secret required on every inbound MCP request
    pub mcp_auth_token: String,
    /// HTTP listen port
    pub http_port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `INTERVALS_ATHLETE_ID` or `INTERVALS_API_KEY` is missing or shorter
    ///   than the minimum secret length
    /// - `PORT` is set but does not parse as a TCP port
    pub fn from_env() -> Result<Self, ConfigError> {
        let intervals_base_url = env::var(env_config::INTERVALS_API_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| defaults::INTERVALS_API_BASE_URL.into())
            .trim_end_matches('/')
            .to_owned();

        let athlete_id = required_secret(
            env_config::INTERVALS_ATHLETE_ID,
            limits::MIN_SECRET_LENGTH,
        )?;
        let api_key = required_secret(env_config::INTERVALS_API_KEY, limits::MIN_SECRET_LENGTH)?;

        let mcp_auth_token = match env::var(env_config::MCP_AUTH_TOKEN) {
            Ok(token) if token.len() >= limits::MIN_AUTH_TOKEN_LENGTH => token,
            _ => {
                let token = generate_auth_token();
                // The operator must be able to discover the self-provisioned
                // token; it is printed exactly once, here.
                warn!(
                    "{} missing or shorter than {} chars, generated a random token",
                    env_config::MCP_AUTH_TOKEN,
                    limits::MIN_AUTH_TOKEN_LENGTH
                );
                warn!("{}={token}", env_config::MCP_AUTH_TOKEN);
                token
            }
        };

        let http_port = match env::var(env_config::PORT) {
            Ok(port) if !port.trim().is_empty() => {
                port.trim()
                    .parse::<u16>()
                    .map_err(|e| ConfigError::Invalid {
                        var: env_config::PORT,
                        message: e.to_string(),
                    })?
            }
            _ => defaults::HTTP_PORT,
        };

        Ok(Self {
            intervals_base_url,
            athlete_id,
            api_key,
            mcp_auth_token,
            http_port,
        })
    }

    /// Human-readable configuration summary with secrets prefix-redacted
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "intervals_base_url={}", self.intervals_base_url);
        let _ = writeln!(out, "athlete_id={}...", redact(&self.athlete_id));
        let _ = writeln!(out, "api_key={}...", redact(&self.api_key));
        let _ = writeln!(out, "mcp_auth_token={}...", redact(&self.mcp_auth_token));
        let _ = write!(out, "http_port={}", self.http_port);
        out
    }
}

/// Read a required secret, enforcing the minimum length
fn required_secret(var: &'static str, min: usize) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .filter(|value| value.len() >= min)
        .ok_or(ConfigError::SecretTooShort { var, min })
}

/// Generate an inbound auth token from a cryptographically secure source.
///
/// `Alphanumeric` samples uniformly from the 62-character `[A-Za-z0-9]`
/// alphabet; `OsRng` is the OS CSPRNG. The token is not persisted across
/// restarts.
#[must_use]
pub fn generate_auth_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(limits::GENERATED_AUTH_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// First three characters of a secret for log output
fn redact(secret: &str) -> String {
    secret.chars().take(3).collect()
}
