// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Export CLI
//!
//! Writes the authenticated athlete's Strava activities of one type to a
//! CSV file, with distances, elevation and pace in imperial units.

use anyhow::Context;
use clap::Parser;
use strava_export::{cli::Cli, config::Config, services::StravaClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let config = Config::resolve(cli.into_settings()).context("Failed to load configuration")?;
    tracing::info!(
        output = %config.output_path.display(),
        activity_type = %config.activity_type,
        max_activities = config.max_activities,
        "Starting Strava export"
    );

    let client = StravaClient::new();
    let summary = strava_export::run(&config, &client)
        .await
        .context("Strava export failed")?;

    tracing::info!(
        fetched = summary.fetched,
        exported = summary.exported,
        gear_lookups = summary.gear_lookups,
        "Export complete"
    );
    Ok(())
}

/// Initialize logging to stderr, as JSON or compact text.
fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strava_export=info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
