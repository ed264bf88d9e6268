// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetch, enrich, format and write activities.

pub mod export;
pub mod formatter;
pub mod gear;
pub mod paginator;
pub mod strava;

pub use export::{select_columns, write_csv, write_raw_dump};
pub use formatter::{format_activity, is_activity_type};
pub use gear::{add_gear_names, GearCache};
pub use paginator::fetch_all_activities;
pub use strava::StravaClient;
