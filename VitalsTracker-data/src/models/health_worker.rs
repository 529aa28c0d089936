use serde::{Deserialize, Serialize};

/// Storage model for a health worker in the directory roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthWorkerRecord {
    pub id: String,
    pub name: String,

    /// Role label as shown in the directory (ASHA, Doctor, Nurse, ANM, Specialist)
    pub role: String,

    pub specialization: Option<String>,
    pub location: String,

    /// Distance from the patient in kilometres
    pub distance_km: f64,

    pub rating: f64,
    pub total_reviews: u32,
    pub available: bool,
    pub languages: Vec<String>,
    pub experience: String,

    /// Next free slot when the worker is currently unavailable
    pub next_available: Option<String>,

    /// Consultation fee in rupees, absent for free community services
    pub consultation_fee: Option<u32>,
}
