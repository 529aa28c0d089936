use axum::extract::{Json, State};
use tracing::{info, instrument};

use vitals_tracker_domain::entities::WorkerFilter;
use vitals_tracker_domain::services::ReadingFilter;

use super::vitals::map_service_error;
use super::workers::map_directory_error;
use crate::api::routes::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::dashboard::{DashboardResponse, QuickStats};

/// Nearby workers shown on the landing page
const NEARBY_WORKER_COUNT: usize = 3;

/// Landing view with recent readings, nearby workers and quick stats
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard assembled", body = DashboardResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "dashboard"
)]
#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ErrorResponse> {
    let window_days = state.config.alert_window_days;

    let recent = ReadingFilter {
        limit: Some(state.config.dashboard_recent_limit),
        ..Default::default()
    };
    let (recent_readings, _) = state.vitals.get_filtered_readings(recent).await.map_err(map_service_error)?;
    let summary = state.vitals.get_summary(window_days).await.map_err(map_service_error)?;

    let nearby_workers = state
        .directory
        .nearest_available(NEARBY_WORKER_COUNT)
        .await
        .map_err(map_directory_error)?;
    let available_workers = state
        .directory
        .search(WorkerFilter::default())
        .await
        .map_err(map_directory_error)?
        .iter()
        .filter(|w| w.available)
        .count();

    info!(alerts = summary.alerts_in_window, "Dashboard assembled");

    Ok(Json(DashboardResponse {
        recent_readings,
        nearby_workers,
        quick_stats: QuickStats {
            total_readings: summary.total_readings,
            alerts_in_window: summary.alerts_in_window,
            window_days,
            available_workers,
            logging_streak_days: summary.logging_streak_days,
        },
    }))
}
