// ABOUTME: HTTP middleware for the MCP endpoint
// ABOUTME: Currently the bearer token access gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod auth;
