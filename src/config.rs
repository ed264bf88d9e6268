// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run configuration.
//!
//! Credentials come from (in priority order) command-line flags, the
//! environment (including a `.env` file), and finally an optional JSON
//! credentials file.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Default cap on the number of activities fetched.
pub const DEFAULT_MAX_ACTIVITIES: usize = 100_000;
/// Largest page size the Strava list endpoint accepts.
pub const MAX_PER_PAGE: u32 = 200;
/// Default activity type kept in the export.
pub const DEFAULT_ACTIVITY_TYPE: &str = "Run";
/// Where the unfiltered activity dump is written.
pub const DEFAULT_RAW_DUMP_PATH: &str = "raw_activities.json";

/// Strava OAuth app credentials plus the athlete's refresh token.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Fully resolved configuration for one export run.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Destination CSV file
    pub output_path: PathBuf,
    /// Destination of the pretty-printed raw activity dump
    pub raw_dump_path: PathBuf,
    /// Stop paginating once this many activities have been accumulated
    pub max_activities: usize,
    /// Activities requested per page
    pub per_page: u32,
    /// Only activities with this `type` are exported
    pub activity_type: String,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            credentials: Credentials {
                client_id: "test_client_id".to_string(),
                client_secret: "test_secret".to_string(),
                refresh_token: "test_refresh".to_string(),
            },
            output_path: PathBuf::from("activities.csv"),
            raw_dump_path: PathBuf::from(DEFAULT_RAW_DUMP_PATH),
            max_activities: DEFAULT_MAX_ACTIVITIES,
            per_page: MAX_PER_PAGE,
            activity_type: DEFAULT_ACTIVITY_TYPE.to_string(),
        }
    }

    /// Build a config from explicit settings, filling in missing credentials
    /// from the environment and then from `creds_file`.
    pub fn resolve(settings: Settings) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let from_file = match settings.creds_file.as_deref() {
            Some(path) => Some(load_credentials_file(path)?),
            None => None,
        };

        let pick = |flag: Option<String>, var: &'static str, file: Option<&String>| {
            flag.or_else(|| env::var(var).ok())
                .or_else(|| file.cloned())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let credentials = Credentials {
            client_id: pick(
                settings.client_id,
                "STRAVA_CLIENT_ID",
                from_file.as_ref().map(|c| &c.client_id),
            )?,
            client_secret: pick(
                settings.client_secret,
                "STRAVA_CLIENT_SECRET",
                from_file.as_ref().map(|c| &c.client_secret),
            )?,
            refresh_token: pick(
                settings.refresh_token,
                "STRAVA_REFRESH_TOKEN",
                from_file.as_ref().map(|c| &c.refresh_token),
            )?,
        };

        if settings.max_activities == 0 {
            return Err(ConfigError::Invalid(
                "activities number must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            credentials,
            output_path: settings.output_path,
            raw_dump_path: settings
                .raw_dump_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RAW_DUMP_PATH)),
            max_activities: settings.max_activities,
            per_page: settings.per_page.clamp(1, MAX_PER_PAGE),
            activity_type: settings.activity_type,
        })
    }
}

/// Raw, possibly incomplete settings as supplied by the caller.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_path: PathBuf,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
    pub creds_file: Option<PathBuf>,
    pub raw_dump_path: Option<PathBuf>,
    pub max_activities: usize,
    pub per_page: u32,
    pub activity_type: String,
}

/// Read a `{client_id, client_secret, refresh_token}` JSON file.
pub fn load_credentials_file(path: &Path) -> Result<Credentials, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::CredsFile(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| ConfigError::CredsFile(format!("{}: {}", path.display(), e)))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required credential: {0}")]
    Missing(&'static str),

    #[error("Unreadable credentials file {0}")]
    CredsFile(String),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings() -> Settings {
        Settings {
            output_path: PathBuf::from("out.csv"),
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            refresh_token: Some("refresh".to_string()),
            creds_file: None,
            raw_dump_path: None,
            max_activities: DEFAULT_MAX_ACTIVITIES,
            per_page: 500,
            activity_type: DEFAULT_ACTIVITY_TYPE.to_string(),
        }
    }

    #[test]
    fn test_flags_win_and_per_page_is_clamped() {
        let config = Config::resolve(settings()).expect("Config should resolve");

        assert_eq!(config.credentials.client_id, "id");
        assert_eq!(config.credentials.refresh_token, "refresh");
        assert_eq!(config.per_page, MAX_PER_PAGE);
        assert_eq!(config.raw_dump_path, PathBuf::from(DEFAULT_RAW_DUMP_PATH));
    }

    #[test]
    fn test_credentials_file_fills_gaps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"client_id":"file_id","client_secret":"file_secret","refresh_token":"file_refresh"}}"#
        )
        .unwrap();

        let creds = load_credentials_file(file.path()).expect("creds should parse");
        assert_eq!(creds.client_id, "file_id");
        assert_eq!(creds.refresh_token, "file_refresh");

        let mut s = settings();
        s.creds_file = Some(file.path().to_path_buf());
        let config = Config::resolve(s).unwrap();
        // Flags still take priority over the file.
        assert_eq!(config.credentials.client_secret, "secret");
    }

    #[test]
    fn test_zero_max_activities_rejected() {
        let mut s = settings();
        s.max_activities = 0;
        assert!(matches!(Config::resolve(s), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::test_default();
        let debug = format!("{:?}", config.credentials);
        assert!(!debug.contains("test_secret"));
        assert!(debug.contains("test_client_id"));
    }
}
