use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use vitals_tracker_domain::health::ComponentStatus;
use vitals_tracker_domain::services::{create_default_directory_service, create_default_vitals_service};
use vitals_tracker_domain::testing::MockHealthService;

use super::{get, seeded_app};
use crate::api::routes::{create_app, create_router, AppState};
use crate::config::AppConfig;

fn app_with_health(health: MockHealthService) -> axum::Router {
    let state = AppState::new(
        Arc::new(create_default_vitals_service()),
        Arc::new(create_default_directory_service()),
        AppConfig::default(),
    );
    create_router(state, Arc::new(health))
}

#[tokio::test]
async fn test_health_check_reports_components() {
    let (status, body) = get(seeded_app().await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["components"]["storage"]["status"], "ok");
    assert_eq!(body["components"]["directory"]["status"], "ok");
}

#[tokio::test]
async fn test_healthy_without_sample_readings() {
    let config = AppConfig {
        seed_sample_data: false,
        ..Default::default()
    };
    let (status, body) = get(create_app(config).await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["directory"]["status"], "ok");
}

#[tokio::test]
async fn test_unhealthy_storage() {
    let app = app_with_health(MockHealthService::new().with_storage_status(ComponentStatus::Unhealthy));
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_degraded_storage() {
    let app = app_with_health(MockHealthService::new().with_storage_status(ComponentStatus::Degraded));
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_security_headers_and_api_docs() {
    let app = app_with_health(MockHealthService::new());
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}
