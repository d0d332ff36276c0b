//! Environment Configuration Tests
//!
//! Startup validation must fail before the listener ever binds, and a weak or
//! absent inbound auth token must be replaced by a generated strong one.
//! Tests are serialized because they mutate process environment variables.

use anyhow::Result;
use intervals_mcp_server::config::environment::{generate_auth_token, ServerConfig};
use serial_test::serial;
use std::env;

/// Reset every variable the loader reads, then apply the given pairs
fn set_env(pairs: &[(&str, &str)]) {
    for var in [
        "INTERVALS_API_BASE_URL",
        "INTERVALS_ATHLETE_ID",
        "INTERVALS_API_KEY",
        "MCP_AUTH_TOKEN",
        "PORT",
    ] {
        env::remove_var(var);
    }
    for (var, value) in pairs {
        env::set_var(var, value);
    }
}

#[test]
#[serial]
fn test_short_api_key_aborts_startup() {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "ab"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
    ]);

    assert!(ServerConfig::from_env().is_err());
}

#[test]
#[serial]
fn test_missing_athlete_id_aborts_startup() {
    set_env(&[
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
    ]);

    assert!(ServerConfig::from_env().is_err());
}

#[test]
#[serial]
fn test_defaults_apply_for_base_url_and_port() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
    ]);

    let config = ServerConfig::from_env()?;
    assert_eq!(config.intervals_base_url, "https://intervals.icu");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.athlete_id, "i12345");
    Ok(())
}

#[test]
#[serial]
fn test_base_url_trailing_slash_is_trimmed() -> Result<()> {
    set_env(&[
        ("INTERVALS_API_BASE_URL", "https://example.com/"),
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
    ]);

    let config = ServerConfig::from_env()?;
    assert_eq!(config.intervals_base_url, "https://example.com");
    Ok(())
}

#[test]
#[serial]
fn test_missing_auth_token_is_generated() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
    ]);

    let config = ServerConfig::from_env()?;
    assert_eq!(config.mcp_auth_token.len(), 32);
    assert!(config
        .mcp_auth_token
        .chars()
        .all(|c| c.is_ascii_alphanumeric()));
    Ok(())
}

#[test]
#[serial]
fn test_short_auth_token_is_replaced() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "tooshort"),
    ]);

    let config = ServerConfig::from_env()?;
    assert_ne!(config.mcp_auth_token, "tooshort");
    assert_eq!(config.mcp_auth_token.len(), 32);
    Ok(())
}

#[test]
#[serial]
fn test_strong_auth_token_is_kept_verbatim() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "a-strong-configured-token-value"),
    ]);

    let config = ServerConfig::from_env()?;
    assert_eq!(config.mcp_auth_token, "a-strong-configured-token-value");
    Ok(())
}

#[test]
#[serial]
fn test_port_override_and_invalid_port() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
        ("PORT", "9100"),
    ]);
    let config = ServerConfig::from_env()?;
    assert_eq!(config.http_port, 9100);

    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
        ("PORT", "not-a-port"),
    ]);
    assert!(ServerConfig::from_env().is_err());
    Ok(())
}

#[test]
#[serial]
fn test_summary_redacts_secrets() -> Result<()> {
    set_env(&[
        ("INTERVALS_ATHLETE_ID", "i12345"),
        ("INTERVALS_API_KEY", "valid_api_key"),
        ("MCP_AUTH_TOKEN", "0123456789abcdefghijklmn"),
    ]);

    let config = ServerConfig::from_env()?;
    let summary = config.summary();
    assert!(summary.contains("api_key=val..."));
    assert!(!summary.contains("valid_api_key"));
    assert!(!summary.contains("0123456789abcdefghijklmn"));
    Ok(())
}

#[test]
fn test_generated_tokens_are_alphanumeric_and_unique() {
    let first = generate_auth_token();
    let second = generate_auth_token();

    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
}
