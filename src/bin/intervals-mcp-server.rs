// ABOUTME: Server binary wiring configuration, logging, and the HTTP transport
// ABOUTME: Fails startup before binding when required secrets are missing or weak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intervals.icu MCP Server Binary
//!
//! Loads configuration from the environment, initializes structured logging,
//! and serves the bearer-gated Streamable HTTP MCP endpoint. A missing or
//! too-short athlete ID or API key aborts the process here, before the
//! listener binds.

use anyhow::Result;
use clap::Parser;
use intervals_mcp_server::{
    config::environment::ServerConfig,
    logging,
    mcp::{http_transport, resources::ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "intervals-mcp-server")]
#[command(about = "Intervals.icu MCP server - bearer-gated activity summaries for LLMs")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first: the generated-token notice from config loading must be
    // visible to the operator.
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Intervals.icu MCP Server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    http_transport::serve(resources).await
}
