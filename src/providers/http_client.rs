// ABOUTME: Shared HTTP client with connection pooling for provider API calls
// ABOUTME: Singleton with bounded request and connect timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout for upstream calls in seconds.
///
/// Also the upper bound on how long a tool call can hold an in-flight
/// upstream request; a dropped inbound connection abandons the call earlier.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection establishment timeout in seconds
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client for provider API calls.
///
/// The client pools connections and applies the bounded timeouts above.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
