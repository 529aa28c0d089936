use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use vitals_tracker_domain::entities::{Notification, PendingInput, Reading, VitalStatus, VitalType, VitalsSummary};
use vitals_tracker_domain::services::{
    thresholds, ReadingFilter, SubmissionOutcome, VitalsServiceError, VitalsServiceTrait,
};

use crate::api::routes::AppState;
use crate::entities::common::{ErrorResponse, PaginatedResponse, ReadingPage};
use crate::entities::vitals::{
    EvaluationResponse, HistoryQueryParams, RangeEntry, SubmitReadingRequest, SubmitReadingResponse,
    SummaryQueryParams,
};

/// Service type for dependency injection
pub type VitalsServiceHandle = Arc<dyn VitalsServiceTrait + Send + Sync>;

/// Readings per page when the client does not ask for a limit
pub const DEFAULT_HISTORY_LIMIT: usize = 6;

const HISTORY_PATH: &str = "/api/v1/vitals";

/// Map a service failure onto the public error format
pub(crate) fn map_service_error(err: VitalsServiceError) -> ErrorResponse {
    match err {
        VitalsServiceError::Validation(validation) => {
            warn!("Invalid vital reading: {}", validation);
            ErrorResponse::validation_error(&validation.to_string(), None)
                .with_notification(Notification::from(&validation))
        }
        VitalsServiceError::NotFound(msg) => {
            info!("{}", msg);
            ErrorResponse::not_found("vital reading")
        }
        VitalsServiceError::Repository(msg) => {
            error!("Vitals storage failure: {}", msg);
            ErrorResponse::internal_error()
        }
    }
}

/// Log a new vital reading
#[utoipa::path(
    post,
    path = "/api/v1/vitals",
    request_body = SubmitReadingRequest,
    responses(
        (status = 201, description = "Reading recorded", body = SubmitReadingResponse),
        (status = 400, description = "Reading rejected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state, request))]
pub async fn submit_reading(
    State(state): State<AppState>,
    Json(request): Json<SubmitReadingRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    request.validate()?;
    info!("Submitting {} reading", request.vital_type);

    match state.vitals.submit_reading(PendingInput::from(request)).await {
        Ok(SubmissionOutcome::Saved { reading, notification, .. }) => {
            Ok((StatusCode::CREATED, Json(SubmitReadingResponse { reading, notification })))
        }
        Ok(SubmissionOutcome::Rejected { error, notification, .. }) => {
            Err(ErrorResponse::validation_error(&error.to_string(), None).with_notification(notification))
        }
        Err(e) => Err(map_service_error(e)),
    }
}

/// Validate and classify a reading without recording it
#[utoipa::path(
    post,
    path = "/api/v1/vitals/evaluate",
    request_body = SubmitReadingRequest,
    responses(
        (status = 200, description = "Reading classified", body = EvaluationResponse),
        (status = 400, description = "Reading rejected", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state, request))]
pub async fn evaluate_reading(
    State(state): State<AppState>,
    Json(request): Json<SubmitReadingRequest>,
) -> Result<Json<EvaluationResponse>, ErrorResponse> {
    request.validate()?;

    let evaluation = state
        .vitals
        .evaluate(&PendingInput::from(request))
        .map_err(map_service_error)?;

    Ok(Json(EvaluationResponse::from(evaluation)))
}

/// Get a single reading by ID
#[utoipa::path(
    get,
    path = "/api/v1/vitals/{id}",
    params(
        ("id" = String, Path, description = "Vital reading ID")
    ),
    responses(
        (status = 200, description = "Reading found", body = Reading),
        (status = 404, description = "Reading not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn get_reading(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reading>, ErrorResponse> {
    info!("Fetching vital reading with ID: {}", id);

    state.vitals.get_reading_by_id(&id).await.map(Json).map_err(map_service_error)
}

/// Generate pagination links from the current request.
///
/// `since` is re-emitted from its parsed value in UTC so that offsets
/// such as `+05:30` survive the round trip through the query string.
fn generate_pagination_links(
    total_count: usize,
    limit: usize,
    offset: usize,
    base_url: &str,
    query_params: &HistoryQueryParams,
    since: Option<DateTime<Utc>>,
) -> (Option<String>, Option<String>) {
    let link = |page_offset: usize| {
        let mut query_parts = Vec::new();

        if let Some(vital_type) = &query_params.vital_type {
            query_parts.push(format!("vital_type={}", vital_type));
        }

        if let Some(status) = &query_params.status {
            query_parts.push(format!("status={}", status));
        }

        if let Some(since) = since {
            query_parts.push(format!("since={}", since.to_rfc3339_opts(SecondsFormat::AutoSi, true)));
        }

        query_parts.push(format!("limit={}", limit));
        query_parts.push(format!("offset={}", page_offset));

        format!("{}?{}", base_url, query_parts.join("&"))
    };

    let next = offset
        .checked_add(limit)
        .filter(|next_offset| *next_offset < total_count)
        .map(link);
    let previous = (offset > 0).then(|| link(offset.saturating_sub(limit)));

    (next, previous)
}

/// Get paginated reading history, most recent first
#[utoipa::path(
    get,
    path = "/api/v1/vitals",
    params(
        HistoryQueryParams
    ),
    responses(
        (status = 200, description = "Reading history retrieved", body = ReadingPage),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn get_reading_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQueryParams>,
) -> Result<Json<PaginatedResponse<Reading>>, ErrorResponse> {
    params.validate()?;

    let vital_type = params
        .vital_type
        .as_deref()
        .map(str::parse::<VitalType>)
        .transpose()
        .map_err(|e| ErrorResponse::bad_request(&e))?;
    let status = params
        .status
        .as_deref()
        .map(str::parse::<VitalStatus>)
        .transpose()
        .map_err(|e| ErrorResponse::bad_request(&e))?;
    let since = match params.since.as_deref() {
        Some(date_str) => match DateTime::parse_from_rfc3339(date_str) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(_) => {
                return Err(ErrorResponse::bad_request(
                    "Invalid since format. Use ISO 8601 (e.g. 2024-03-15T08:30:00Z)",
                ))
            }
        },
        None => None,
    };

    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let filter = ReadingFilter {
        vital_type,
        status,
        since,
        limit: Some(limit),
        offset: Some(offset),
    };

    let (data, total_count) = state
        .vitals
        .get_filtered_readings(filter)
        .await
        .map_err(map_service_error)?;

    let (next, previous) = generate_pagination_links(total_count, limit, offset, HISTORY_PATH, &params, since);

    Ok(Json(PaginatedResponse {
        total_count,
        offset,
        limit,
        next,
        previous,
        data,
    }))
}

/// Get counts, recent alerts and the logging streak
#[utoipa::path(
    get,
    path = "/api/v1/vitals/summary",
    params(
        SummaryQueryParams
    ),
    responses(
        (status = 200, description = "Summary generated", body = VitalsSummary),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn get_vitals_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryQueryParams>,
) -> Result<Json<VitalsSummary>, ErrorResponse> {
    params.validate()?;
    let window_days = params.window_days.unwrap_or(state.config.alert_window_days);

    info!("Generating vitals summary for {} days", window_days);
    state.vitals.get_summary(window_days).await.map(Json).map_err(map_service_error)
}

/// Reference ranges for every vital type
#[utoipa::path(
    get,
    path = "/api/v1/vitals/ranges",
    responses(
        (status = 200, description = "Reference ranges", body = [RangeEntry]),
    ),
    tag = "vitals"
)]
pub async fn get_vital_ranges() -> Json<Vec<RangeEntry>> {
    let entries = VitalType::ALL
        .into_iter()
        .map(|vital_type| RangeEntry {
            vital_type,
            display_name: vital_type.display_name().to_string(),
            unit: vital_type.unit().to_string(),
            range: thresholds::range_for(vital_type),
        })
        .collect();

    Json(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_link_generation() {
        let query_params = HistoryQueryParams {
            vital_type: Some("heart_rate".to_string()),
            status: None,
            since: None,
            limit: Some(10),
            offset: Some(20),
        };

        let (next, prev) = generate_pagination_links(50, 10, 20, HISTORY_PATH, &query_params, None);
        let next_url = next.unwrap();
        let prev_url = prev.unwrap();

        assert_eq!(next_url, "/api/v1/vitals?vital_type=heart_rate&limit=10&offset=30");
        assert!(prev_url.contains("offset=10"));

        // First page
        let (next, prev) = generate_pagination_links(50, 10, 0, HISTORY_PATH, &query_params, None);
        assert!(next.is_some());
        assert!(prev.is_none());

        // Last page
        let (next, prev) = generate_pagination_links(50, 10, 40, HISTORY_PATH, &query_params, None);
        assert!(next.is_none());
        assert!(prev.is_some());
    }

    #[test]
    fn test_pagination_near_usize_max_has_no_next_page() {
        let query_params = HistoryQueryParams::default();

        let (next, prev) = generate_pagination_links(3, 6, usize::MAX, HISTORY_PATH, &query_params, None);
        assert!(next.is_none());
        assert_eq!(
            prev.unwrap(),
            format!("/api/v1/vitals?limit=6&offset={}", usize::MAX - 6)
        );
    }

    #[test]
    fn test_pagination_links_carry_since_in_utc() {
        let query_params = HistoryQueryParams {
            since: Some("2024-03-15T14:00:00+05:30".to_string()),
            ..Default::default()
        };
        let since = DateTime::parse_from_rfc3339("2024-03-15T14:00:00+05:30")
            .unwrap()
            .with_timezone(&Utc);

        let (next, _) = generate_pagination_links(20, 6, 0, HISTORY_PATH, &query_params, Some(since));
        assert_eq!(
            next.unwrap(),
            "/api/v1/vitals?since=2024-03-15T08:30:00Z&limit=6&offset=6"
        );
    }

    #[test]
    fn test_validation_errors_carry_notification() {
        use vitals_tracker_domain::services::ValidationError;

        let response = map_service_error(VitalsServiceError::Validation(ValidationError::MissingValue));
        assert_eq!(response.error, "validation_error");
        assert_eq!(response.notification.unwrap().title, "Missing Value");
    }
}
