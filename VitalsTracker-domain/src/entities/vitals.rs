use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Kind of vital sign a reading measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VitalType {
    #[default]
    BloodPressure,
    BloodSugar,
    HeartRate,
    Temperature,
    Weight,
    OxygenSaturation,
}

impl VitalType {
    /// Every vital type, in the order the logging form offers them
    pub const ALL: [VitalType; 6] = [
        VitalType::BloodPressure,
        VitalType::BloodSugar,
        VitalType::HeartRate,
        VitalType::Temperature,
        VitalType::Weight,
        VitalType::OxygenSaturation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "blood_pressure",
            VitalType::BloodSugar => "blood_sugar",
            VitalType::HeartRate => "heart_rate",
            VitalType::Temperature => "temperature",
            VitalType::Weight => "weight",
            VitalType::OxygenSaturation => "oxygen_saturation",
        }
    }

    /// Human readable name used in notifications and listings
    pub fn display_name(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "Blood Pressure",
            VitalType::BloodSugar => "Blood Sugar",
            VitalType::HeartRate => "Heart Rate",
            VitalType::Temperature => "Temperature",
            VitalType::Weight => "Weight",
            VitalType::OxygenSaturation => "Oxygen Saturation",
        }
    }

    /// Unit attached to readings of this type
    pub fn unit(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "mmHg",
            VitalType::BloodSugar => "mg/dL",
            VitalType::HeartRate => "bpm",
            VitalType::Temperature => "°F",
            VitalType::Weight => "kg",
            VitalType::OxygenSaturation => "%",
        }
    }
}

impl fmt::Display for VitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VitalType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown vital type: {}", s))
    }
}

/// Severity of a reading relative to its range table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::Critical => "critical",
        }
    }

    /// Warning and critical readings count as alerts
    pub fn is_alert(self) -> bool {
        !matches!(self, VitalStatus::Normal)
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(VitalStatus::Normal),
            "warning" => Ok(VitalStatus::Warning),
            "critical" => Ok(VitalStatus::Critical),
            _ => Err(format!("Unknown vital status: {}", s)),
        }
    }
}

/// Inclusive numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Normal, warning and critical bands for one classifiable metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VitalRange {
    pub normal: Band,
    pub warning: Band,
    /// Nominal band; anything outside normal and warning classifies as critical
    pub critical: Band,
}

/// Form state while a user is composing a submission.
///
/// `systolic` and `diastolic` are only read for blood pressure, `value` for
/// every other type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PendingInput {
    #[serde(default)]
    pub vital_type: VitalType,
    #[serde(default)]
    pub systolic: Option<String>,
    #[serde(default)]
    pub diastolic: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PendingInput {
    /// Blood pressure input from the two form fields
    pub fn blood_pressure(systolic: impl Into<String>, diastolic: impl Into<String>) -> Self {
        Self {
            vital_type: VitalType::BloodPressure,
            systolic: Some(systolic.into()),
            diastolic: Some(diastolic.into()),
            ..Default::default()
        }
    }

    /// Single-value input for any other vital type
    pub fn single(vital_type: VitalType, value: impl Into<String>) -> Self {
        Self {
            vital_type,
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Clear the form back to its defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A validated value, ready for classification
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    BloodPressure {
        systolic: f64,
        diastolic: f64,
        /// Text as entered, `systolic/diastolic`
        text: String,
    },
    Single {
        value: f64,
        /// Text as entered
        text: String,
    },
}

impl NormalizedValue {
    /// Number the range table is keyed on.
    ///
    /// Blood pressure classifies on whole millimetres of systolic, so
    /// `120.5/80` is read as 120.
    pub fn classification_value(&self) -> f64 {
        match self {
            NormalizedValue::BloodPressure { systolic, .. } => systolic.trunc(),
            NormalizedValue::Single { value, .. } => *value,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            NormalizedValue::BloodPressure { text, .. } | NormalizedValue::Single { text, .. } => text,
        }
    }
}

/// An immutable recorded observation of a vital sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Reading {
    /// Unique identifier for the reading
    pub id: String,

    pub vital_type: VitalType,

    /// Value as displayed, `systolic/diastolic` for blood pressure
    pub value: String,

    pub unit: String,

    /// When the reading was recorded
    pub timestamp: DateTime<Utc>,

    /// Derived from the vital type and value, never set directly
    pub status: VitalStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate view over the reading history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VitalsSummary {
    /// Number of readings analyzed
    pub total_readings: usize,

    pub normal_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,

    /// Warning and critical readings recorded within the window
    pub alerts_in_window: usize,

    /// Alert window length in days
    pub window_days: u32,

    /// Consecutive days with at least one reading, ending today
    pub logging_streak_days: u32,

    /// Most recent reading of each vital type that has one
    pub latest_by_type: Vec<Reading>,

    /// Timestamp of the analysis
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vital_type_round_trips_through_str() {
        for vital_type in VitalType::ALL {
            assert_eq!(vital_type.as_str().parse::<VitalType>(), Ok(vital_type));
        }
        assert!("pulse".parse::<VitalType>().is_err());
    }

    #[test]
    fn test_units_match_lookup() {
        assert_eq!(VitalType::BloodPressure.unit(), "mmHg");
        assert_eq!(VitalType::BloodSugar.unit(), "mg/dL");
        assert_eq!(VitalType::HeartRate.unit(), "bpm");
        assert_eq!(VitalType::Temperature.unit(), "°F");
        assert_eq!(VitalType::Weight.unit(), "kg");
        assert_eq!(VitalType::OxygenSaturation.unit(), "%");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&VitalType::OxygenSaturation).unwrap();
        assert_eq!(json, "\"oxygen_saturation\"");

        let status: VitalStatus = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(status, VitalStatus::Warning);
    }

    #[test]
    fn test_pending_input_defaults_and_reset() {
        let mut input = PendingInput::single(VitalType::Weight, "70").with_notes("morning");
        assert_eq!(input.notes.as_deref(), Some("morning"));

        input.reset();
        assert_eq!(input, PendingInput::default());
        assert_eq!(input.vital_type, VitalType::BloodPressure);
    }

    #[test]
    fn test_pending_input_deserializes_partial_form() {
        let input: PendingInput = serde_json::from_str(r#"{"vital_type":"heart_rate","value":"78"}"#).unwrap();
        assert_eq!(input, PendingInput::single(VitalType::HeartRate, "78"));
    }

    #[test]
    fn test_band_is_inclusive() {
        let band = Band::new(90.0, 120.0);
        assert!(band.contains(90.0));
        assert!(band.contains(120.0));
        assert!(!band.contains(120.5));
    }
}
