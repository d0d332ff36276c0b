// ABOUTME: Activity-to-text rendering for MCP tool results
// ABOUTME: One fixed-shape summary line per activity, in upstream order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Result formatting.
//!
//! Renders an ordered activity slice into a single text block with one line
//! per record:
//!
//! ```text
//! July 14: Morning Ride - 42.3 km in 95:07, avg HR 142 bpm, load: 118
//! ```
//!
//! A record missing any field the line needs (name, parseable local start
//! date, moving time, distance, heart rate, load) is skipped with a warning
//! log; the remaining records still render. An empty input slice yields an
//! empty string, which is a successful empty result rather than an error.

use crate::models::Activity;
use chrono::NaiveDateTime;
use tracing::warn;

/// Wire format of `start_date_local` (no timezone)
const START_DATE_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render activities into the summary text block, skipping malformed records
#[must_use]
pub fn format_activities(activities: &[Activity]) -> String {
    let mut out = String::new();
    for activity in activities {
        if let Some(line) = format_activity_line(activity) {
            out.push_str(&line);
        } else {
            warn!(
                id = activity.id.as_deref().unwrap_or("unknown"),
                "skipping activity with missing or malformed fields"
            );
        }
    }
    out
}

/// Render one activity line, or `None` when a required field is absent
fn format_activity_line(activity: &Activity) -> Option<String> {
    let name = activity.name.as_deref()?;
    let start = activity.start_date_local.as_deref()?;
    let date = NaiveDateTime::parse_from_str(start, START_DATE_LOCAL_FORMAT).ok()?;
    let moving_time = activity.moving_time.filter(|secs| *secs >= 0)?;
    let distance = activity.distance.filter(|meters| *meters >= 0.0)?;
    let heartrate = activity.average_heartrate?;
    let load = activity.training_load?;

    let distance_km = distance / 1000.0;
    Some(format!(
        "{}: {name} - {distance_km:.1} km in {}, avg HR {} bpm, load: {load}\n",
        date.format("%B %-d"),
        format_duration(moving_time),
        heartrate.round() as i64,
    ))
}

/// Render seconds as `minutes:seconds`, seconds zero-padded, minutes unbounded
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes}:{secs:02}")
}
