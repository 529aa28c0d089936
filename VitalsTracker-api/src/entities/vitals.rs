use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use vitals_tracker_domain::entities::{Notification, PendingInput, Reading, VitalRange, VitalStatus, VitalType};
use vitals_tracker_domain::services::Evaluation;

/// Request payload for logging a vital reading.
///
/// Values are taken as entered; completeness and numeric checks happen in
/// the evaluator so that rejections carry a user-facing notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitReadingRequest {
    /// Vital type being logged (default: blood_pressure)
    #[serde(default)]
    pub vital_type: VitalType,

    /// Systolic pressure, blood pressure only
    #[validate(length(max = 16, message = "Systolic cannot exceed 16 characters"))]
    pub systolic: Option<String>,

    /// Diastolic pressure, blood pressure only
    #[validate(length(max = 16, message = "Diastolic cannot exceed 16 characters"))]
    pub diastolic: Option<String>,

    /// Measured value for every other vital type
    #[validate(length(max = 16, message = "Value cannot exceed 16 characters"))]
    pub value: Option<String>,

    /// Optional notes about the reading
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,
}

impl From<SubmitReadingRequest> for PendingInput {
    fn from(request: SubmitReadingRequest) -> Self {
        PendingInput {
            vital_type: request.vital_type,
            systolic: request.systolic,
            diastolic: request.diastolic,
            value: request.value,
            notes: request.notes,
        }
    }
}

/// A stored reading together with the acknowledgement to show
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitReadingResponse {
    pub reading: Reading,
    pub notification: Notification,
}

/// Classification of an input that was not stored
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvaluationResponse {
    pub vital_type: VitalType,
    /// Value as it would be displayed
    pub value: String,
    pub unit: String,
    pub status: VitalStatus,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            vital_type: evaluation.vital_type,
            value: evaluation.value,
            unit: evaluation.unit,
            status: evaluation.status,
        }
    }
}

/// Query parameters for retrieving reading history
#[derive(Debug, Deserialize, Clone, Default, Validate, IntoParams, ToSchema)]
pub struct HistoryQueryParams {
    /// Only readings of this vital type
    pub vital_type: Option<String>,

    /// Only readings with this status (normal, warning, critical)
    pub status: Option<String>,

    /// ISO 8601 lower bound on the reading time
    pub since: Option<String>,

    /// Maximum number of results (default: 6, max: 100)
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<usize>,

    /// Pagination offset (default: 0)
    pub offset: Option<usize>,
}

/// Query parameters for the vitals summary
#[derive(Debug, Deserialize, Default, Validate, IntoParams, ToSchema)]
pub struct SummaryQueryParams {
    /// Alert window in days (default from configuration, max: 365)
    #[validate(range(min = 1, max = 365, message = "Window must be between 1 and 365 days"))]
    pub window_days: Option<u32>,
}

/// Reference ranges for one vital type
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RangeEntry {
    pub vital_type: VitalType,
    pub display_name: String,
    pub unit: String,
    /// Absent for types that are not classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<VitalRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_converts_to_pending_input() {
        let request: SubmitReadingRequest =
            serde_json::from_str(r#"{"systolic":"118","diastolic":"76","notes":"after walk"}"#).unwrap();
        let input = PendingInput::from(request);
        assert_eq!(input, PendingInput::blood_pressure("118", "76").with_notes("after walk"));
    }

    #[test]
    fn test_request_validation_limits_lengths() {
        let request = SubmitReadingRequest {
            vital_type: VitalType::Weight,
            value: Some("7".repeat(40)),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SubmitReadingRequest {
            vital_type: VitalType::Weight,
            value: Some("72.5".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_history_limit_bounds() {
        let params = HistoryQueryParams {
            limit: Some(0),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = HistoryQueryParams {
            limit: Some(100),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
