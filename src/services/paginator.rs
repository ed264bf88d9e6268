// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page through the athlete's activity list.

use crate::error::Result;
use crate::models::ActivityRecord;
use crate::services::StravaClient;

/// Fetch activities page by page until an empty page comes back or at least
/// `max_activities` have been accumulated.
///
/// The cap is checked after a whole page is appended, so the result can
/// overshoot it by up to `per_page - 1` records. Order is preserved exactly
/// as Strava returns it (newest first).
pub async fn fetch_all_activities(
    client: &StravaClient,
    access_token: &str,
    per_page: u32,
    max_activities: usize,
) -> Result<Vec<ActivityRecord>> {
    let mut activities: Vec<ActivityRecord> = Vec::new();
    let mut page = 1u32;

    loop {
        tracing::info!(page, found = activities.len(), "Retrieving page");
        let results = client.list_activities(access_token, page, per_page).await?;

        if results.is_empty() {
            break;
        }

        activities.extend(results);

        if activities.len() >= max_activities {
            tracing::info!(
                found = activities.len(),
                max_activities,
                "Reached activity limit, stopping"
            );
            break;
        }

        page += 1;
    }

    tracing::info!(total = activities.len(), pages = page, "Finished fetching activities");
    Ok(activities)
}
