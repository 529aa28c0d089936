mod health_test;
mod vitals_test;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use vitals_tracker_domain::services::{create_default_directory_service, create_default_vitals_service};
use vitals_tracker_domain::testing::MockHealthService;

use crate::api::routes::{create_app, create_router, AppState};
use crate::config::AppConfig;

/// Router over empty reading storage and the sample roster
pub(super) fn empty_app() -> Router {
    let config = AppConfig {
        seed_sample_data: false,
        ..Default::default()
    };
    let state = AppState::new(
        Arc::new(create_default_vitals_service()),
        Arc::new(create_default_directory_service()),
        config,
    );
    create_router(state, Arc::new(MockHealthService::new()))
}

/// Router built the way the binary builds it, with sample data
pub(super) async fn seeded_app() -> Router {
    create_app(AppConfig::default()).await
}

pub(super) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap();
    send(app, request).await
}

pub(super) async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
