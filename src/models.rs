// ABOUTME: Common data structures for upstream fitness data
// ABOUTME: Mirrors the Intervals.icu activity payload with every field optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Upstream data model.
//!
//! Intervals.icu omits fields freely depending on activity type and recording
//! device, so every field is `Option` and downstream consumers decide how to
//! handle gaps. Records are request-scoped and immutable once parsed.

use serde::{Deserialize, Serialize};

/// One upstream-reported activity.
///
/// Field names follow the Intervals.icu wire format; unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Upstream activity identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Activity name as entered by the athlete
    #[serde(default)]
    pub name: Option<String>,

    /// Local start timestamp, `YYYY-MM-DDTHH:MM:SS`, no timezone
    #[serde(default)]
    pub start_date_local: Option<String>,

    /// Activity type label (Ride, Run, ...)
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,

    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<i64>,

    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,

    /// Average heart rate in beats per minute
    #[serde(default)]
    pub average_heartrate: Option<f64>,

    /// Training load score
    #[serde(rename = "icu_training_load", default)]
    pub training_load: Option<i64>,
}
