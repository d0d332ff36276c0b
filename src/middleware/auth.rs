// ABOUTME: Bearer token access gate for the MCP endpoint
// ABOUTME: Byte-exact Authorization header comparison, rejecting before the protocol layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Access gate middleware.
//!
//! Every request on the MCP endpoint (POST message and GET stream alike) must
//! carry `Authorization: Bearer <token>` matching the configured token
//! byte-exactly - no trimming, no case-folding, no per-method exemption. On
//! mismatch or absence the request is terminated with `401` before the
//! protocol layer runs. The presented credential is never logged.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::header::AUTHORIZATION;
use http::StatusCode;

/// Expected `Authorization` header value, precomputed once at startup
#[derive(Debug, Clone)]
pub struct BearerToken {
    header_value: String,
}

impl BearerToken {
    /// Build the expected header value from the configured token
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            header_value: format!("Bearer {token}"),
        }
    }

    /// True when the presented header matches exactly
    #[must_use]
    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented == Some(self.header_value.as_str())
    }
}

/// Reject any request whose `Authorization` header is not an exact match
pub async fn require_bearer(
    State(expected): State<BearerToken>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if expected.matches(presented) {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            "Unauthorized: Invalid Bearer Token",
        )
            .into_response()
    }
}
