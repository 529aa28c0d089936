use std::sync::Arc;

use async_trait::async_trait;

use crate::models::health_worker::HealthWorkerRecord;
use super::errors::RepositoryError;

/// Read-only access to the health-worker roster
#[async_trait]
pub trait HealthWorkerRepositoryTrait: Send + Sync {
    /// Get every worker in roster order
    async fn get_all(&self) -> Result<Vec<HealthWorkerRecord>, RepositoryError>;

    /// Get a worker by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<HealthWorkerRecord>, RepositoryError>;
}

/// Static, in-memory roster of health workers
#[derive(Debug, Clone, Default)]
pub struct HealthWorkerRepository {
    workers: Arc<Vec<HealthWorkerRecord>>,
}

impl HealthWorkerRepository {
    /// Create a repository over the given roster
    pub fn new(workers: Vec<HealthWorkerRecord>) -> Self {
        Self {
            workers: Arc::new(workers),
        }
    }

    /// Create a repository loaded with the built-in sample roster
    pub fn with_sample_roster() -> Self {
        Self::new(sample_roster())
    }
}

#[async_trait]
impl HealthWorkerRepositoryTrait for HealthWorkerRepository {
    async fn get_all(&self) -> Result<Vec<HealthWorkerRecord>, RepositoryError> {
        Ok(self.workers.as_ref().clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<HealthWorkerRecord>, RepositoryError> {
        Ok(self.workers.iter().find(|w| w.id == id).cloned())
    }
}

fn langs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The sample roster shown in the worker directory
pub fn sample_roster() -> Vec<HealthWorkerRecord> {
    vec![
        HealthWorkerRecord {
            id: "1".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            role: "Doctor".to_string(),
            specialization: Some("General Medicine".to_string()),
            location: "Primary Health Centre, Sector 15".to_string(),
            distance_km: 2.5,
            rating: 4.8,
            total_reviews: 245,
            available: true,
            languages: langs(&["Hindi", "English", "Punjabi"]),
            experience: "8 years".to_string(),
            next_available: None,
            consultation_fee: Some(200),
        },
        HealthWorkerRecord {
            id: "2".to_string(),
            name: "Sunita Devi".to_string(),
            role: "ASHA".to_string(),
            specialization: None,
            location: "Community Health Worker, Ward 12".to_string(),
            distance_km: 1.2,
            rating: 4.9,
            total_reviews: 189,
            available: true,
            languages: langs(&["Hindi", "Bengali", "Bhojpuri"]),
            experience: "6 years".to_string(),
            next_available: None,
            consultation_fee: None,
        },
        HealthWorkerRecord {
            id: "3".to_string(),
            name: "Nurse Ravi Kumar".to_string(),
            role: "Nurse".to_string(),
            specialization: None,
            location: "Government Hospital, Main Road".to_string(),
            distance_km: 3.1,
            rating: 4.7,
            total_reviews: 156,
            available: false,
            languages: langs(&["Hindi", "English", "Tamil"]),
            experience: "4 years".to_string(),
            next_available: Some("2:30 PM".to_string()),
            consultation_fee: None,
        },
        HealthWorkerRecord {
            id: "4".to_string(),
            name: "Dr. Meera Gupta".to_string(),
            role: "Specialist".to_string(),
            specialization: Some("Cardiology".to_string()),
            location: "District Hospital, Medical Complex".to_string(),
            distance_km: 5.8,
            rating: 4.9,
            total_reviews: 89,
            available: true,
            languages: langs(&["Hindi", "English"]),
            experience: "12 years".to_string(),
            next_available: None,
            consultation_fee: Some(500),
        },
        HealthWorkerRecord {
            id: "5".to_string(),
            name: "Kavita Sharma".to_string(),
            role: "ANM".to_string(),
            specialization: None,
            location: "Sub Health Centre, Village Rampur".to_string(),
            distance_km: 4.2,
            rating: 4.6,
            total_reviews: 203,
            available: true,
            languages: langs(&["Hindi", "Haryanvi"]),
            experience: "7 years".to_string(),
            next_available: None,
            consultation_fee: None,
        },
    ]
}
