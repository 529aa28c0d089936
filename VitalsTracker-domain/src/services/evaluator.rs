//! Validation and classification of user-entered vital readings.
//!
//! The evaluator turns a [`PendingInput`] into an immutable [`Reading`] or
//! rejects it with a [`ValidationError`]. It keeps no state between calls;
//! identity and time come from the injected [`IdSource`] and [`Clock`].

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::entities::notification::Notification;
use crate::entities::vitals::{NormalizedValue, PendingInput, Reading, VitalStatus, VitalType};
use crate::services::thresholds;

/// Why an input could not become a reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blood pressure needs both fields
    #[error("Incomplete data: both systolic and diastolic values are required")]
    IncompleteData,

    /// Non blood pressure types need a value
    #[error("Missing value")]
    MissingValue,

    /// Text could not be read as a finite number
    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: &'static str, input: String },
}

impl ValidationError {
    /// Short title for the notification collaborator
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::IncompleteData => "Incomplete Data",
            ValidationError::MissingValue => "Missing Value",
            ValidationError::InvalidNumber { .. } => "Invalid Number",
        }
    }

    /// Longer description for the notification collaborator
    pub fn description(&self) -> String {
        match self {
            ValidationError::IncompleteData => "Please enter both systolic and diastolic values".to_string(),
            ValidationError::MissingValue => "Please enter a value".to_string(),
            ValidationError::InvalidNumber { field, .. } => format!("Please enter a numeric value for {}", field),
        }
    }
}

/// Supplies a unique opaque identifier per call
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Supplies the current time per call
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Result of submitting the logging form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The reading was created; the form starts over from `next_input`
    Saved {
        reading: Reading,
        next_input: PendingInput,
        notification: Notification,
    },
    /// The input is handed back unchanged for correction
    Rejected {
        error: ValidationError,
        input: PendingInput,
        notification: Notification,
    },
}

fn required_text(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::InvalidNumber {
            field,
            input: text.to_string(),
        }),
    }
}

/// Check completeness and parse the input into a number or a pressure pair
pub fn validate(input: &PendingInput) -> Result<NormalizedValue, ValidationError> {
    match input.vital_type {
        VitalType::BloodPressure => {
            let (Some(systolic_text), Some(diastolic_text)) =
                (required_text(&input.systolic), required_text(&input.diastolic))
            else {
                return Err(ValidationError::IncompleteData);
            };

            let systolic = parse_number("systolic", systolic_text)?;
            let diastolic = parse_number("diastolic", diastolic_text)?;

            Ok(NormalizedValue::BloodPressure {
                systolic,
                diastolic,
                text: format!("{}/{}", systolic_text, diastolic_text),
            })
        }
        _ => {
            let text = required_text(&input.value).ok_or(ValidationError::MissingValue)?;
            let value = parse_number("value", text)?;

            Ok(NormalizedValue::Single {
                value,
                text: text.to_string(),
            })
        }
    }
}

/// Validates, classifies and stamps vital readings
#[derive(Debug, Clone, Default)]
pub struct VitalsEvaluator<I = UuidIdSource, C = SystemClock> {
    ids: I,
    clock: C,
}

impl VitalsEvaluator {
    /// Evaluator using random UUIDs and the system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource, C: Clock> VitalsEvaluator<I, C> {
    /// Evaluator with explicit identity and time sources
    pub fn with_sources(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    pub fn validate(&self, input: &PendingInput) -> Result<NormalizedValue, ValidationError> {
        validate(input)
    }

    pub fn classify(&self, vital_type: VitalType, value: f64) -> VitalStatus {
        thresholds::classify(vital_type, value)
    }

    /// Current time on the injected clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Validate and classify, then mint a new reading
    pub fn create_reading(&self, input: &PendingInput) -> Result<Reading, ValidationError> {
        self.create_reading_at(input, self.clock.now())
    }

    /// Like [`create_reading`](Self::create_reading), stamped with `timestamp`
    pub fn create_reading_at(&self, input: &PendingInput, timestamp: DateTime<Utc>) -> Result<Reading, ValidationError> {
        let normalized = validate(input)?;
        let status = thresholds::classify(input.vital_type, normalized.classification_value());

        let reading = Reading {
            id: self.ids.next_id(),
            vital_type: input.vital_type,
            value: normalized.display_text().to_string(),
            unit: input.vital_type.unit().to_string(),
            timestamp,
            status,
            notes: required_text(&input.notes).map(str::to_string),
        };

        debug!(id = %reading.id, vital_type = %reading.vital_type, status = %reading.status, "Reading evaluated");
        Ok(reading)
    }

    /// Run the form submission workflow
    pub fn submit(&self, input: PendingInput) -> SubmissionOutcome {
        match self.create_reading(&input) {
            Ok(reading) => {
                let notification = Notification::reading_saved(reading.vital_type);
                SubmissionOutcome::Saved {
                    reading,
                    next_input: PendingInput::default(),
                    notification,
                }
            }
            Err(error) => {
                let notification = Notification::from(&error);
                SubmissionOutcome::Rejected {
                    error,
                    input,
                    notification,
                }
            }
        }
    }
}
