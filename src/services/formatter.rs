// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derive human-readable fields on an activity.
//!
//! Every derived field is written back onto the record, replacing any
//! existing value with the same name. A derived field whose source is
//! missing or not numeric is simply not written; the projection step will
//! fill it with the absence marker.

use crate::models::{cell_text, fields, is_truthy, ActivityRecord, ACTIVITY_URL_BASE};
use crate::time_utils::{duration_from_secs_f64, format_duration};
use serde_json::Value;

pub const METERS_TO_MILES: f64 = 1.0 / 1609.344;
pub const METERS_PER_FOOT: f64 = 0.3048;
/// One mile per minute, in m/s.
const PACE_FACTOR_MIN_PER_MILE: f64 = 26.8224;

/// Add the formatted fields to `activity`.
pub fn format_activity(activity: &mut ActivityRecord) {
    if let Some(distance) = number(activity, fields::DISTANCE) {
        set(
            activity,
            fields::DISTANCE_MI,
            round_to(distance * METERS_TO_MILES, 2),
        );
    }

    if let Some(gain) = number(activity, fields::ELEVATION_GAIN) {
        set(
            activity,
            fields::ELEVATION_GAIN_FT,
            round_to(gain / METERS_PER_FOOT, 0),
        );
    }

    if let Some(elapsed) = number(activity, fields::ELAPSED_TIME) {
        let total_time = format_duration(duration_from_secs_f64(elapsed));
        set(activity, fields::TOTAL_TIME, total_time);
    }

    if let Some(date) = activity
        .get(fields::START_DATE_LOCAL)
        .and_then(Value::as_str)
        .map(|t| calendar_date(t).to_string())
    {
        set(activity, fields::START_DATE_LOCAL, date);
    }

    if let Some(url) = activity
        .get(fields::ID)
        .filter(|v| !v.is_null())
        .map(|id| format!("{}{}", ACTIVITY_URL_BASE, cell_text(id)))
    {
        set(activity, fields::URL, url);
    }

    if is_truthy(activity.get(fields::AVERAGE_SPEED)) {
        if let Some(speed) = number(activity, fields::AVERAGE_SPEED) {
            set(activity, fields::AVG_PACE, pace_per_mile(speed));
        }
    }
}

/// True if the activity's `type` tag equals `activity_type`.
pub fn is_activity_type(activity: &ActivityRecord, activity_type: &str) -> bool {
    activity.get(fields::TYPE).and_then(Value::as_str) == Some(activity_type)
}

/// Minutes-per-mile pace for a speed in m/s, rendered like a duration.
pub fn pace_per_mile(speed_mps: f64) -> String {
    let seconds = PACE_FACTOR_MIN_PER_MILE / speed_mps * 60.0;
    format_duration(duration_from_secs_f64(seconds))
}

/// Round to `places` decimal places, halves to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// The part of an ISO-8601 timestamp before the `T`.
pub fn calendar_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn number(activity: &ActivityRecord, field: &str) -> Option<f64> {
    activity.get(field).and_then(Value::as_f64)
}

fn set(activity: &mut ActivityRecord, field: &str, value: impl Into<Value>) {
    activity.insert(field.to_string(), value.into());
}
