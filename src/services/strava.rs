// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Exchanging a refresh token for a short-lived access token
//! - Listing the athlete's activities one page at a time
//! - Gear detail lookups
//! - Rate limit / bad token detection

use crate::config::Credentials;
use crate::error::{AppError, Result};
use crate::models::ActivityRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;

const STRAVA_HOST: &str = "https://www.strava.com";

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
}

impl Default for StravaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StravaClient {
    /// Create a client for the production Strava host.
    pub fn new() -> Self {
        Self::with_host(STRAVA_HOST)
    }

    /// Create a client against another host serving the same paths
    /// (`/api/v3/...` and `/oauth/token`).
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/api/v3", host),
            token_url: format!("{}/oauth/token", host),
        }
    }

    /// Exchange the refresh token for an access token.
    ///
    /// Any failure here is an [`AppError::Auth`]: nothing else can run
    /// without a token.
    pub async fn exchange_refresh_token(&self, credentials: &Credentials) -> Result<String> {
        tracing::info!("Requesting access token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("refresh_token", credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
                ("f", "json"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Strava token exchange failed");
            return Err(AppError::Auth(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("Failed to parse token response: {}", e)))?;

        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Auth("Token response has no access_token".to_string()))?;

        tracing::info!("Access token obtained");
        Ok(access_token.to_string())
    }

    /// List one page of the athlete's activities (1-indexed).
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivityRecord>> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page.to_string()), ("page", page.to_string())])
            .send()
            .await?;

        let body: Value = self.check_response_json(response).await?;
        match body {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(AppError::MalformedResponse(format!(
                        "Expected activity object, got {}",
                        other
                    ))),
                })
                .collect(),
            other => Err(AppError::MalformedResponse(format!(
                "Expected array of activities on page {}, got {}",
                page, other
            ))),
        }
    }

    /// Look up a piece of gear and return its display name, if it has one.
    pub async fn get_gear_name(
        &self,
        access_token: &str,
        gear_id: &str,
    ) -> Result<Option<String>> {
        let url = format!("{}/gear/{}", self.base_url, gear_id);
        let body: Value = self.get_json(&url, access_token).await?;

        Ok(body.get("name").and_then(Value::as_str).map(str::to_string))
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, access_token: &str) -> Result<T> {
        let response = self.http.get(url).bearer_auth(access_token).send().await?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("JSON parse error: {}", e)))
    }
}
