use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Storage model for a single vital sign reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReadingRecord {
    /// Unique identifier for the reading
    pub id: String,

    /// Vital type key (e.g. `blood_pressure`, `heart_rate`)
    pub vital_type: String,

    /// Value as displayed, `systolic/diastolic` for blood pressure
    pub value: String,

    /// Unit label for the value
    pub unit: String,

    /// When the reading was recorded
    pub timestamp: DateTime<Utc>,

    /// Status key (`normal`, `warning` or `critical`)
    pub status: String,

    /// Optional free-text note
    pub notes: Option<String>,
}

/// Filter and pagination options for listing readings
#[derive(Debug, Clone, Default)]
pub struct ReadingQuery {
    /// Only readings of this vital type key
    pub vital_type: Option<String>,

    /// Only readings with this status key
    pub status: Option<String>,

    /// Only readings recorded at or after this instant
    pub since: Option<DateTime<Utc>>,

    /// Maximum number of results
    pub limit: Option<usize>,

    /// Number of results to skip
    pub offset: Option<usize>,
}

impl ReadingQuery {
    /// Check whether a record passes the non-pagination filters
    pub fn matches(&self, record: &VitalReadingRecord) -> bool {
        if let Some(vital_type) = &self.vital_type {
            if &record.vital_type != vital_type {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if &record.status != status {
                return false;
            }
        }

        if let Some(since) = self.since {
            if record.timestamp < since {
                return false;
            }
        }

        true
    }
}
