use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use vitals_tracker_data::repository::tests::MockVitalReadingRepository;
use vitals_tracker_domain::services::{create_default_directory_service, VitalsService};
use vitals_tracker_domain::testing::MockHealthService;

use super::{empty_app, get, post_json, seeded_app};
use crate::api::routes::{create_router, AppState};
use crate::config::AppConfig;

#[tokio::test]
async fn test_submit_reading_created() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "heart_rate", "value": "78", "notes": "resting" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reading"]["value"], "78");
    assert_eq!(body["reading"]["unit"], "bpm");
    assert_eq!(body["reading"]["status"], "normal");
    assert_eq!(body["reading"]["notes"], "resting");
    assert_eq!(body["notification"]["title"], "Reading Saved");
    assert_eq!(body["notification"]["description"], "Heart Rate recorded successfully");
}

#[tokio::test]
async fn test_submit_blood_pressure_uses_systolic() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "blood_pressure", "systolic": "140", "diastolic": "90" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reading"]["value"], "140/90");
    assert_eq!(body["reading"]["unit"], "mmHg");
    assert_eq!(body["reading"]["status"], "critical");
}

#[tokio::test]
async fn test_fractional_systolic_classifies_on_whole_part() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "blood_pressure", "systolic": "120.5", "diastolic": "80" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reading"]["value"], "120.5/80");
    assert_eq!(body["reading"]["status"], "normal");
}

#[tokio::test]
async fn test_history_with_huge_offset_is_an_empty_page() {
    let uri = format!("/api/v1/vitals?offset={}", usize::MAX);
    let (status, body) = get(seeded_app().await, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert!(body.get("next").map_or(true, |next| next.is_null()));
}

#[tokio::test]
async fn test_incomplete_blood_pressure_rejected() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "blood_pressure", "systolic": "", "diastolic": "90" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["notification"]["title"], "Incomplete Data");
    assert_eq!(body["notification"]["variant"], "destructive");
}

#[tokio::test]
async fn test_non_numeric_value_rejected() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "blood_sugar", "value": "abc" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notification"]["title"], "Invalid Number");
}

#[tokio::test]
async fn test_overlong_notes_fail_request_validation() {
    let (status, body) = post_json(
        empty_app(),
        "/api/v1/vitals",
        json!({ "vital_type": "weight", "value": "70", "notes": "x".repeat(1001) }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].get("notes").is_some());
}

#[tokio::test]
async fn test_submitted_reading_can_be_fetched() {
    let app = empty_app();
    let (_, created) = post_json(
        app.clone(),
        "/api/v1/vitals",
        json!({ "vital_type": "blood_sugar", "value": "250" }),
    )
    .await;
    let id = created["reading"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(app, &format!("/api/v1/vitals/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "critical");
}

#[tokio::test]
async fn test_missing_reading_not_found() {
    let (status, body) = get(empty_app(), "/api/v1/vitals/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_history_pagination() {
    let (status, body) = get(seeded_app().await, "/api/v1/vitals?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["vital_type"], "blood_pressure");
    assert_eq!(body["next"], "/api/v1/vitals?limit=2&offset=2");
    assert!(body.get("previous").is_none());
}

#[tokio::test]
async fn test_history_default_limit_and_filters() {
    let (status, body) = get(seeded_app().await, "/api/v1/vitals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 6);

    let (status, body) = get(seeded_app().await, "/api/v1/vitals?status=normal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 2);

    let (status, body) = get(seeded_app().await, "/api/v1/vitals?vital_type=heart_rate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["value"], "78");

    let since = (chrono::Utc::now() - chrono::Duration::hours(3)).to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let (status, body) = get(seeded_app().await, &format!("/api/v1/vitals?since={}", since)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
}

#[tokio::test]
async fn test_history_rejects_bad_query() {
    let (status, body) = get(empty_app(), "/api/v1/vitals?vital_type=pulse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (status, _) = get(empty_app(), "/api/v1/vitals?limit=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(empty_app(), "/api/v1/vitals?since=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ISO 8601"));
}

#[tokio::test]
async fn test_evaluate_does_not_store() {
    let app = empty_app();
    let (status, body) = post_json(
        app.clone(),
        "/api/v1/vitals/evaluate",
        json!({ "vital_type": "blood_pressure", "systolic": "125", "diastolic": "82" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "125/82");
    assert_eq!(body["status"], "warning");

    let (_, history) = get(app, "/api/v1/vitals").await;
    assert_eq!(history["total_count"], 0);
}

#[tokio::test]
async fn test_ranges_listed_for_every_type() {
    let (status, body) = get(empty_app(), "/api/v1/vitals/ranges").await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["vital_type"], "blood_pressure");
    assert_eq!(entries[0]["range"]["normal"]["min"], 90.0);
    assert!(entries[3].get("range").is_none());
}

#[tokio::test]
async fn test_summary_of_seeded_history() {
    let (status, body) = get(seeded_app().await, "/api/v1/vitals/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_readings"], 3);
    assert_eq!(body["critical_count"], 1);
    assert_eq!(body["alerts_in_window"], 1);
    assert_eq!(body["window_days"], 7);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let state = AppState::new(
        Arc::new(VitalsService::new(MockVitalReadingRepository::failing())),
        Arc::new(create_default_directory_service()),
        AppConfig::default(),
    );
    let app = create_router(state, Arc::new(MockHealthService::new()));

    let (status, body) = get(app, "/api/v1/vitals").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
}
