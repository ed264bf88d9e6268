// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line arguments.

use crate::config::{Settings, DEFAULT_ACTIVITY_TYPE, DEFAULT_MAX_ACTIVITIES, MAX_PER_PAGE};
use clap::Parser;
use std::path::PathBuf;

/// Retrieve Strava activities and write them to a CSV file.
#[derive(Debug, Parser)]
#[command(name = "strava-export", version)]
pub struct Cli {
    /// CSV file to write
    pub output_filename: PathBuf,

    /// Strava OAuth client ID
    #[arg(short = 'i', long = "client_id", env = "STRAVA_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Strava OAuth client secret
    #[arg(
        short = 'c',
        long = "client_secret",
        env = "STRAVA_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// Athlete refresh token
    #[arg(
        short = 'r',
        long = "refresh_token",
        env = "STRAVA_REFRESH_TOKEN",
        hide_env_values = true
    )]
    pub refresh_token: Option<String>,

    /// Stop fetching once at least this many activities are retrieved
    #[arg(short = 'a', long = "activities_number", default_value_t = DEFAULT_MAX_ACTIVITIES)]
    pub activities_number: usize,

    /// Activities requested per page (at most 200)
    #[arg(long, default_value_t = MAX_PER_PAGE)]
    pub per_page: u32,

    /// Activity type to export
    #[arg(short = 't', long, default_value = DEFAULT_ACTIVITY_TYPE)]
    pub activity_type: String,

    /// Where to write the unfiltered JSON dump
    #[arg(long)]
    pub raw_dump: Option<PathBuf>,

    /// JSON file with client_id, client_secret and refresh_token
    #[arg(long)]
    pub creds: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Settings for [`crate::config::Config::resolve`].
    pub fn into_settings(self) -> Settings {
        Settings {
            output_path: self.output_filename,
            client_id: self.client_id,
            client_secret: self.client_secret,
            refresh_token: self.refresh_token,
            creds_file: self.creds,
            raw_dump_path: self.raw_dump,
            max_activities: self.activities_number,
            per_page: self.per_page,
            activity_type: self.activity_type,
        }
    }
}
