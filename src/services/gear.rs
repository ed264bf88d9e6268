// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resolve gear ids on activities to display names.

use crate::error::Result;
use crate::models::{cell_text, fields, is_truthy, ActivityRecord, ABSENT};
use crate::services::StravaClient;
use serde_json::Value;
use std::collections::HashMap;

/// Gear id -> resolved name, for a single run.
///
/// A lookup whose response had no name is remembered as `None` so the same
/// id is never requested twice.
#[derive(Debug, Default, Clone)]
pub struct GearCache {
    names: HashMap<String, Option<String>>,
}

impl GearCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `gear_id`; the outer `None` means "never looked up".
    pub fn get(&self, gear_id: &str) -> Option<Option<&str>> {
        self.names.get(gear_id).map(|name| name.as_deref())
    }

    pub fn insert(&mut self, gear_id: String, name: Option<String>) {
        self.names.insert(gear_id, name);
    }

    /// Number of distinct gear ids looked up so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Add a `gear_name` field to every activity, in place and in order.
///
/// Activities without a gear id get [`ABSENT`] with no request made. Each
/// distinct gear id is requested at most once per `cache`.
pub async fn add_gear_names(
    client: &StravaClient,
    access_token: &str,
    activities: &mut [ActivityRecord],
    cache: &mut GearCache,
) -> Result<()> {
    for activity in activities.iter_mut() {
        let gear_id = activity
            .get(fields::GEAR_ID)
            .filter(|v| is_truthy(Some(*v)))
            .map(cell_text);

        let name = match gear_id {
            None => None,
            Some(id) => resolve(client, access_token, &id, cache).await?,
        };

        activity.insert(
            fields::GEAR_NAME.to_string(),
            name.map(Value::String).unwrap_or(ABSENT),
        );
    }

    tracing::info!(distinct_gear = cache.len(), "Gear names resolved");
    Ok(())
}

async fn resolve(
    client: &StravaClient,
    access_token: &str,
    gear_id: &str,
    cache: &mut GearCache,
) -> Result<Option<String>> {
    if let Some(cached) = cache.get(gear_id) {
        tracing::trace!(gear_id, "Gear cache hit");
        return Ok(cached.map(str::to_string));
    }

    tracing::debug!(gear_id, "Looking up gear");
    let name = client.get_gear_name(access_token, gear_id).await?;
    if name.is_none() {
        tracing::warn!(gear_id, "Gear response has no name");
    }

    cache.insert(gear_id.to_string(), name.clone());
    Ok(name)
}
