// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for duration formatting.

use chrono::TimeDelta;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Build a duration from fractional seconds, rounded to the microsecond
/// (halves to even).
pub fn duration_from_secs_f64(seconds: f64) -> TimeDelta {
    TimeDelta::microseconds((seconds * MICROS_PER_SECOND as f64).round_ties_even() as i64)
}

/// Render a duration as `H:MM:SS`, with a `N day(s), ` prefix past 24 hours
/// and a `.ffffff` suffix when there are leftover microseconds.
///
/// Negative durations keep a non-negative clock part and a negative day
/// count, e.g. `-1 day, 23:59:59`.
pub fn format_duration(delta: TimeDelta) -> String {
    let total = delta
        .num_microseconds()
        .unwrap_or_else(|| delta.num_seconds().saturating_mul(MICROS_PER_SECOND));

    let days = total.div_euclid(MICROS_PER_DAY);
    let rem = total.rem_euclid(MICROS_PER_DAY);

    let micros = rem % MICROS_PER_SECOND;
    let secs = rem / MICROS_PER_SECOND;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let mut out = String::new();
    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", h, m, s));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
