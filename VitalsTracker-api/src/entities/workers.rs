use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use vitals_tracker_domain::entities::WorkerFilter;

/// Query parameters for searching the health worker directory.
///
/// A missing criterion, an empty one, or `all` disables that filter.
#[derive(Debug, Deserialize, Serialize, Clone, Default, Validate, IntoParams, ToSchema)]
pub struct WorkerQueryParams {
    /// Free text matched against name, role and specialization
    #[validate(length(max = 100, message = "Search cannot exceed 100 characters"))]
    pub search: Option<String>,

    /// Spoken language
    pub language: Option<String>,

    /// Role label (ASHA, Doctor, Nurse, ANM, Specialist)
    pub role: Option<String>,
}

impl From<WorkerQueryParams> for WorkerFilter {
    fn from(params: WorkerQueryParams) -> Self {
        WorkerFilter {
            search: params.search,
            language: params.language,
            role: params.role,
        }
    }
}
