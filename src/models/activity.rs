// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity records and their projected CSV view.

use serde_json::{Map, Value};

/// A raw activity as returned by `GET /athlete/activities`.
///
/// Kept as an open JSON object so the raw dump stays verbatim and derived
/// fields can be added in place.
pub type ActivityRecord = Map<String, Value>;

/// Marker substituted for any field that is missing or could not be resolved.
pub const ABSENT: Value = Value::Null;

/// Base of the public activity detail page.
pub const ACTIVITY_URL_BASE: &str = "https://www.strava.com/activities/";

/// Columns written to the CSV, in order.
pub const OUTPUT_COLUMNS: &[&str] = &[
    "start_date_local",
    "type",
    "name",
    "distance_mi",
    "total_time",
    "avg_pace",
    "total_elevation_gain_ft",
    "calories",
    "average_heartrate",
    "max_heartrate",
    "gear_name",
    "URL",
];

/// Field names read from or written onto an [`ActivityRecord`].
pub mod fields {
    pub const ID: &str = "id";
    pub const TYPE: &str = "type";
    pub const DISTANCE: &str = "distance";
    pub const ELAPSED_TIME: &str = "elapsed_time";
    pub const ELEVATION_GAIN: &str = "total_elevation_gain";
    pub const AVERAGE_SPEED: &str = "average_speed";
    pub const START_DATE_LOCAL: &str = "start_date_local";
    pub const GEAR_ID: &str = "gear_id";

    pub const GEAR_NAME: &str = "gear_name";
    pub const DISTANCE_MI: &str = "distance_mi";
    pub const ELEVATION_GAIN_FT: &str = "total_elevation_gain_ft";
    pub const TOTAL_TIME: &str = "total_time";
    pub const AVG_PACE: &str = "avg_pace";
    pub const URL: &str = "URL";
}

/// An activity restricted to a fixed, ordered set of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    columns: Vec<(String, Value)>,
}

impl ProjectedRecord {
    /// Build a projection from `(column, value)` pairs in output order.
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Column names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(|(_, v)| v)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Truthiness for JSON values: null, false, 0, "" and empty
/// containers are all "unset".
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Render a value as a single CSV cell. The absence marker becomes an empty cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
