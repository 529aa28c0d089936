use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use vitals_tracker_domain::entities::{Notification, Reading};

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// Notification to show the user, for rejected submissions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
            notification: None,
        }
    }

    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self::new("not_found", format!("The requested {} could not be found", resource))
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            details,
            ..Self::new("validation_error", message)
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self::new("bad_request", message)
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self::new("internal_error", "An unexpected error occurred")
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}

impl From<ValidationErrors> for ErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).ok();
        Self::validation_error("Request failed validation", details)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Paginated response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(ReadingPage = PaginatedResponse<Reading>)]
pub struct PaginatedResponse<T> {
    /// Total count of items matching the query
    pub total_count: usize,

    /// Current offset
    pub offset: usize,

    /// Current limit
    pub limit: usize,

    /// URL for the next page (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL for the previous page (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// Actual data items
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ErrorResponse::not_found("reading").into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::bad_request("bad").into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorResponse::validation_error("invalid", None).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorResponse::internal_error().into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_notification_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::not_found("reading")).unwrap();
        assert!(json.get("notification").is_none());
        assert!(json.get("details").is_none());
    }
}
