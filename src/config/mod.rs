// ABOUTME: Configuration module exposing environment-driven server settings
// ABOUTME: All configuration is loaded once at startup and injected explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod environment;
