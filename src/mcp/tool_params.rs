// ABOUTME: Tool argument resolution for get_activities with default and fallback rules
// ABOUTME: Turns the untyped JSON argument bag into a validated activity query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Argument resolver.
//!
//! Tool arguments arrive as a loosely-typed JSON object. This stage extracts
//! each recognized key with a typed, fallible conversion and applies the
//! default and fallback rules as pure functions over optional inputs. The raw
//! JSON bag never travels past this boundary, and this stage never errors:
//!
//! 1. Default window: `[today - 30 days, today]`, process-local clock.
//! 2. `end_date` / `start_date` override the defaults when they parse as
//!    `YYYY-MM-DD`; malformed or empty strings are treated as absent.
//! 3. A window with start after end discards both overrides and reverts to
//!    the default window (silent correction, not an error).
//! 4. `limit` defaults to 10 when absent or not an integer, and is clamped to
//!    the advertised schema bounds 1-100 before dispatch.

use crate::constants::{defaults, json_fields, limits};
use crate::providers::ActivityQuery;
use chrono::{Duration, Local, NaiveDate};
use serde_json::Value;

/// Date wire format of the `start_date` / `end_date` arguments
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the argument bag against the process-local current date
#[must_use]
pub fn resolve_activity_query(args: Option<&Value>) -> ActivityQuery {
    resolve_for_date(args, Local::now().date_naive())
}

/// Resolve the argument bag against an explicit `today` (pure, test-friendly)
#[must_use]
pub fn resolve_for_date(args: Option<&Value>, today: NaiveDate) -> ActivityQuery {
    let default_oldest = today - Duration::days(defaults::ACTIVITY_WINDOW_DAYS);
    let default_newest = today;

    let mut oldest = parse_date_arg(args, json_fields::START_DATE).unwrap_or(default_oldest);
    let mut newest = parse_date_arg(args, json_fields::END_DATE).unwrap_or(default_newest);

    // An inverted window means the caller's overrides contradict each other;
    // both are discarded rather than rejected.
    if oldest > newest {
        oldest = default_oldest;
        newest = default_newest;
    }

    let limit = args
        .and_then(|bag| bag.get(json_fields::LIMIT))
        .and_then(Value::as_i64)
        .map_or(defaults::ACTIVITY_LIMIT, clamp_limit);

    ActivityQuery {
        oldest,
        newest,
        limit,
    }
}

/// Extract one date argument; absent, empty, or unparseable values yield `None`
fn parse_date_arg(args: Option<&Value>, key: &str) -> Option<NaiveDate> {
    args?
        .get(key)?
        .as_str()
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
}

/// Clamp a raw integer limit into the advertised schema bounds
fn clamp_limit(raw: i64) -> u32 {
    let bounded = raw.clamp(
        i64::from(limits::MIN_ACTIVITY_LIMIT),
        i64::from(limits::MAX_ACTIVITY_LIMIT),
    );
    u32::try_from(bounded).unwrap_or(defaults::ACTIVITY_LIMIT)
}
