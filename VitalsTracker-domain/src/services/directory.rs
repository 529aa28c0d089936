use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use crate::entities::conversions;
use crate::entities::worker::{HealthWorker, WorkerFilter};
use vitals_tracker_data::repository::{HealthWorkerRepository, HealthWorkerRepositoryTrait, RepositoryError};

/// Directory service errors
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// Not found error
    #[error("Health worker not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for DirectoryServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => DirectoryServiceError::NotFound(msg),
            other => DirectoryServiceError::Repository(other.to_string()),
        }
    }
}

/// Trait for the health worker directory
#[async_trait]
pub trait DirectoryServiceTrait: Send + Sync {
    /// Workers matching every active criterion, in roster order
    async fn search(&self, filter: WorkerFilter) -> Result<Vec<HealthWorker>, DirectoryServiceError>;

    /// Get a worker by ID
    async fn get_worker(&self, id: &str) -> Result<HealthWorker, DirectoryServiceError>;

    /// Distinct languages spoken across the roster, sorted
    async fn languages(&self) -> Result<Vec<String>, DirectoryServiceError>;

    /// Up to `limit` available workers, nearest first
    async fn nearest_available(&self, limit: usize) -> Result<Vec<HealthWorker>, DirectoryServiceError>;
}

/// Directory service backed by a worker repository
pub struct DirectoryService<R: HealthWorkerRepositoryTrait> {
    repository: R,
}

impl<R: HealthWorkerRepositoryTrait> DirectoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn roster(&self) -> Result<Vec<HealthWorker>, DirectoryServiceError> {
        self.repository
            .get_all()
            .await?
            .into_iter()
            .map(|record| {
                conversions::convert_to_domain_worker(record).map_err(|e| {
                    error!("Stored worker could not be converted: {}", e);
                    DirectoryServiceError::Repository(e)
                })
            })
            .collect()
    }
}

#[async_trait]
impl<R: HealthWorkerRepositoryTrait> DirectoryServiceTrait for DirectoryService<R> {
    async fn search(&self, filter: WorkerFilter) -> Result<Vec<HealthWorker>, DirectoryServiceError> {
        let workers: Vec<HealthWorker> = self
            .roster()
            .await?
            .into_iter()
            .filter(|w| filter.matches(w))
            .collect();

        debug!(?filter, matches = workers.len(), "Searched health worker directory");
        Ok(workers)
    }

    async fn get_worker(&self, id: &str) -> Result<HealthWorker, DirectoryServiceError> {
        let record = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DirectoryServiceError::NotFound(format!("Health worker with ID {} not found", id)))?;

        conversions::convert_to_domain_worker(record).map_err(DirectoryServiceError::Repository)
    }

    async fn languages(&self) -> Result<Vec<String>, DirectoryServiceError> {
        let mut languages: Vec<String> = self
            .roster()
            .await?
            .into_iter()
            .flat_map(|w| w.languages)
            .collect();
        languages.sort();
        languages.dedup();
        Ok(languages)
    }

    async fn nearest_available(&self, limit: usize) -> Result<Vec<HealthWorker>, DirectoryServiceError> {
        let mut available: Vec<HealthWorker> = self.roster().await?.into_iter().filter(|w| w.available).collect();
        available.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        available.truncate(limit);
        Ok(available)
    }
}

/// Create a directory service over the sample roster
pub fn create_default_directory_service() -> DirectoryService<HealthWorkerRepository> {
    DirectoryService::new(HealthWorkerRepository::with_sample_roster())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::worker::WorkerRole;

    fn filter(search: Option<&str>, language: Option<&str>, role: Option<&str>) -> WorkerFilter {
        WorkerFilter {
            search: search.map(str::to_string),
            language: language.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_unfiltered_search_returns_whole_roster() {
        let service = create_default_directory_service();
        let workers = service.search(WorkerFilter::default()).await.unwrap();
        assert_eq!(workers.len(), 5);
        assert_eq!(workers[0].name, "Dr. Priya Sharma");
    }

    #[tokio::test]
    async fn test_search_combines_criteria() {
        let service = create_default_directory_service();

        let sharmas = service.search(filter(Some("sharma"), None, None)).await.unwrap();
        assert_eq!(sharmas.len(), 2);

        let cardiology = service.search(filter(Some("CARDIO"), None, None)).await.unwrap();
        assert_eq!(cardiology.len(), 1);
        assert_eq!(cardiology[0].role, WorkerRole::Specialist);

        let asha = service.search(filter(None, None, Some("asha"))).await.unwrap();
        assert_eq!(asha.len(), 1);
        assert_eq!(asha[0].name, "Sunita Devi");

        let none = service.search(filter(Some("sharma"), None, Some("Nurse"))).await.unwrap();
        assert!(none.is_empty());

        let all = service.search(filter(Some(""), Some("all"), Some("all"))).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_get_worker_and_missing_worker() {
        let service = create_default_directory_service();
        let worker = service.get_worker("3").await.unwrap();
        assert!(!worker.available);
        assert_eq!(worker.next_available.as_deref(), Some("2:30 PM"));

        let err = service.get_worker("99").await.unwrap_err();
        assert!(matches!(err, DirectoryServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_languages_are_sorted_and_distinct() {
        let service = create_default_directory_service();
        let languages = service.languages().await.unwrap();
        let mut sorted = languages.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(languages, sorted);
        assert!(languages.contains(&"Hindi".to_string()));
    }

    #[tokio::test]
    async fn test_nearest_available_skips_unavailable_workers() {
        let service = create_default_directory_service();
        let nearest = service.nearest_available(3).await.unwrap();
        assert_eq!(nearest.len(), 3);
        assert!(nearest.iter().all(|w| w.available));
        assert!(nearest.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }
}
