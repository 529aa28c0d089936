use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use tracing::{error, info, instrument};
use validator::Validate;

use vitals_tracker_domain::entities::{HealthWorker, WorkerFilter};
use vitals_tracker_domain::services::{DirectoryServiceError, DirectoryServiceTrait};

use crate::api::routes::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::workers::WorkerQueryParams;

/// Service type for dependency injection
pub type DirectoryServiceHandle = Arc<dyn DirectoryServiceTrait + Send + Sync>;

pub(crate) fn map_directory_error(err: DirectoryServiceError) -> ErrorResponse {
    match err {
        DirectoryServiceError::NotFound(msg) => {
            info!("{}", msg);
            ErrorResponse::not_found("health worker")
        }
        DirectoryServiceError::Repository(msg) => {
            error!("Directory failure: {}", msg);
            ErrorResponse::internal_error()
        }
    }
}

/// Search the health worker directory
#[utoipa::path(
    get,
    path = "/api/v1/workers",
    params(
        WorkerQueryParams
    ),
    responses(
        (status = 200, description = "Matching health workers", body = [HealthWorker]),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "workers"
)]
#[instrument(skip(state))]
pub async fn search_workers(
    State(state): State<AppState>,
    Query(params): Query<WorkerQueryParams>,
) -> Result<Json<Vec<HealthWorker>>, ErrorResponse> {
    params.validate()?;

    state
        .directory
        .search(WorkerFilter::from(params))
        .await
        .map(Json)
        .map_err(map_directory_error)
}

/// Languages spoken across the directory
#[utoipa::path(
    get,
    path = "/api/v1/workers/languages",
    responses(
        (status = 200, description = "Distinct languages, sorted", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "workers"
)]
#[instrument(skip(state))]
pub async fn get_worker_languages(State(state): State<AppState>) -> Result<Json<Vec<String>>, ErrorResponse> {
    state.directory.languages().await.map(Json).map_err(map_directory_error)
}

/// Get a single health worker by ID
#[utoipa::path(
    get,
    path = "/api/v1/workers/{id}",
    params(
        ("id" = String, Path, description = "Health worker ID")
    ),
    responses(
        (status = 200, description = "Health worker found", body = HealthWorker),
        (status = 404, description = "Health worker not found", body = ErrorResponse),
    ),
    tag = "workers"
)]
#[instrument(skip(state))]
pub async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HealthWorker>, ErrorResponse> {
    state.directory.get_worker(&id).await.map(Json).map_err(map_directory_error)
}
