use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::vitals::VitalType;
use crate::services::evaluator::ValidationError;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// Message for the presentation layer to surface to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// Acknowledge a saved reading
    pub fn reading_saved(vital_type: VitalType) -> Self {
        Self {
            title: "Reading Saved".to_string(),
            description: format!("{} recorded successfully", vital_type.display_name()),
            variant: NotificationVariant::Default,
        }
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        Self {
            title: err.title().to_string(),
            description: err.description(),
            variant: NotificationVariant::Destructive,
        }
    }
}
