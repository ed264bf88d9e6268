// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Export: dump an athlete's Strava activities to CSV
//!
//! This crate exchanges a refresh token for an access token, pages through
//! the athlete's activities, resolves gear names, formats distances, times
//! and paces in imperial units, and writes one CSV row per activity of the
//! selected type.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use error::Result;
use models::OUTPUT_COLUMNS;
use services::{GearCache, StravaClient};

/// Counts from a completed export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Activities fetched from Strava, before filtering
    pub fetched: usize,
    /// Rows written to the CSV
    pub exported: usize,
    /// Distinct gear ids looked up
    pub gear_lookups: usize,
}

/// Run the whole export against `client`.
pub async fn run(config: &Config, client: &StravaClient) -> Result<RunSummary> {
    let access_token = client.exchange_refresh_token(&config.credentials).await?;

    let mut activities = services::fetch_all_activities(
        client,
        &access_token,
        config.per_page,
        config.max_activities,
    )
    .await?;

    services::write_raw_dump(&config.raw_dump_path, &activities)?;

    let mut gear_cache = GearCache::new();
    services::add_gear_names(client, &access_token, &mut activities, &mut gear_cache).await?;

    let fetched = activities.len();
    let rows: Vec<_> = activities
        .into_iter()
        .filter(|a| services::is_activity_type(a, &config.activity_type))
        .map(|mut activity| {
            services::format_activity(&mut activity);
            services::select_columns(&activity, OUTPUT_COLUMNS)
        })
        .collect();

    tracing::info!(
        fetched,
        kept = rows.len(),
        activity_type = %config.activity_type,
        "Filtered activities"
    );

    services::write_csv(&config.output_path, &rows)?;

    Ok(RunSummary {
        fetched,
        exported: rows.len(),
        gear_lookups: gear_cache.len(),
    })
}
