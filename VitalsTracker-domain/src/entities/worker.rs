use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Health worker role category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum WorkerRole {
    /// Accredited Social Health Activist
    #[serde(rename = "ASHA")]
    Asha,
    Doctor,
    Nurse,
    /// Auxiliary Nurse Midwife
    #[serde(rename = "ANM")]
    Anm,
    Specialist,
}

impl WorkerRole {
    pub fn label(self) -> &'static str {
        match self {
            WorkerRole::Asha => "ASHA",
            WorkerRole::Doctor => "Doctor",
            WorkerRole::Nurse => "Nurse",
            WorkerRole::Anm => "ANM",
            WorkerRole::Specialist => "Specialist",
        }
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            WorkerRole::Asha,
            WorkerRole::Doctor,
            WorkerRole::Nurse,
            WorkerRole::Anm,
            WorkerRole::Specialist,
        ]
        .into_iter()
        .find(|role| role.label().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("Unknown worker role: {}", s))
    }
}

/// A health worker listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthWorker {
    pub id: String,
    pub name: String,
    pub role: WorkerRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    pub location: String,
    pub distance_km: f64,
    pub rating: f64,
    pub total_reviews: u32,
    pub available: bool,
    pub languages: Vec<String>,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<u32>,
}

/// Directory search criteria.
///
/// An absent criterion, or the literal `all`, matches every worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerFilter {
    pub search: Option<String>,
    pub language: Option<String>,
    pub role: Option<String>,
}

fn active(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        .map(str::to_lowercase)
}

impl WorkerFilter {
    /// Free text against name, role label and specialization
    pub fn matches_search(&self, worker: &HealthWorker) -> bool {
        let Some(term) = active(&self.search) else {
            return true;
        };

        worker.name.to_lowercase().contains(&term)
            || worker.role.label().to_lowercase().contains(&term)
            || worker
                .specialization
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(&term))
    }

    /// Any spoken language equal to the selected one
    pub fn matches_language(&self, worker: &HealthWorker) -> bool {
        match active(&self.language) {
            Some(language) => worker.languages.iter().any(|l| l.to_lowercase() == language),
            None => true,
        }
    }

    pub fn matches_role(&self, worker: &HealthWorker) -> bool {
        match active(&self.role) {
            Some(role) => worker.role.label().to_lowercase() == role,
            None => true,
        }
    }

    pub fn matches(&self, worker: &HealthWorker) -> bool {
        self.matches_search(worker) && self.matches_language(worker) && self.matches_role(worker)
    }
}
