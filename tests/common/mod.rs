// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::Value;
use strava_export::models::ActivityRecord;
use strava_export::services::StravaClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const ACCESS_TOKEN: &str = "test_access_token";

/// Client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> StravaClient {
    StravaClient::with_host(&server.uri())
}

/// Build a summary activity like the list endpoint returns.
#[allow(dead_code)]
pub fn activity_json(id: u64, sport: &str, gear_id: Option<&str>) -> Value {
    serde_json::json!({
        "id": id,
        "type": sport,
        "name": format!("Activity {}", id),
        "distance": 10000.0,
        "elapsed_time": 3000,
        "total_elevation_gain": 100.0,
        "average_speed": 2.0,
        "average_heartrate": 150.2,
        "max_heartrate": 171.0,
        "start_date_local": "2024-05-01T06:30:00Z",
        "gear_id": gear_id,
    })
}

#[allow(dead_code)]
pub fn to_record(value: Value) -> ActivityRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

/// Mount a successful token exchange.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "access_token": ACCESS_TOKEN,
            "refresh_token": "rotated_refresh",
            "expires_at": 1_900_000_000,
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount one page of the activity list.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, page: u32, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("page", page.to_string()))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mount a gear detail lookup.
#[allow(dead_code)]
pub async fn mount_gear(server: &MockServer, gear_id: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/gear/{}", gear_id)))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}
