use async_trait::async_trait;
use tracing::debug;

use crate::models::vital_reading::{ReadingQuery, VitalReadingRecord};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for vital sign readings.
///
/// The collection is append-only and ordered most recent first.
#[async_trait]
pub trait VitalReadingRepositoryTrait: Send + Sync {
    /// Append a new reading
    async fn append(&self, record: VitalReadingRecord) -> Result<VitalReadingRecord, RepositoryError>;

    /// Get all readings
    async fn get_all(&self) -> Result<Vec<VitalReadingRecord>, RepositoryError>;

    /// Get a reading by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<VitalReadingRecord>, RepositoryError>;

    /// Get a filtered page of readings along with the total match count
    async fn get_filtered(&self, query: ReadingQuery) -> Result<(Vec<VitalReadingRecord>, usize), RepositoryError>;

    /// Number of stored readings
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// In-memory repository for vital readings
#[derive(Debug, Clone, Default)]
pub struct VitalReadingRepository {
    storage: InMemoryStorage,
}

impl VitalReadingRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl VitalReadingRepositoryTrait for VitalReadingRepository {
    async fn append(&self, record: VitalReadingRecord) -> Result<VitalReadingRecord, RepositoryError> {
        debug!("Storing {} reading {}", record.vital_type, record.id);
        self.storage.store_reading(&record).await
    }

    async fn get_all(&self) -> Result<Vec<VitalReadingRecord>, RepositoryError> {
        self.storage.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<VitalReadingRecord>, RepositoryError> {
        self.storage.get_by_id(id).await
    }

    async fn get_filtered(&self, query: ReadingQuery) -> Result<(Vec<VitalReadingRecord>, usize), RepositoryError> {
        debug!(?query, "Listing vital readings");
        self.storage.get_filtered(&query).await
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.storage.len().await
    }
}

// Test helpers, also exported to dependent crates through the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock repository that can be told to fail every call
    #[derive(Debug, Clone, Default)]
    pub struct MockVitalReadingRepository {
        storage: InMemoryStorage,
        fail: bool,
    }

    impl MockVitalReadingRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository whose every operation fails
        pub fn failing() -> Self {
            Self {
                storage: InMemoryStorage::new(),
                fail: true,
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.fail {
                Err(RepositoryError::Lock("mock is configured to fail".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl VitalReadingRepositoryTrait for MockVitalReadingRepository {
        async fn append(&self, record: VitalReadingRecord) -> Result<VitalReadingRecord, RepositoryError> {
            self.check()?;
            self.storage.store_reading(&record).await
        }

        async fn get_all(&self) -> Result<Vec<VitalReadingRecord>, RepositoryError> {
            self.check()?;
            self.storage.get_all().await
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<VitalReadingRecord>, RepositoryError> {
            self.check()?;
            self.storage.get_by_id(id).await
        }

        async fn get_filtered(&self, query: ReadingQuery) -> Result<(Vec<VitalReadingRecord>, usize), RepositoryError> {
            self.check()?;
            self.storage.get_filtered(&query).await
        }

        async fn count(&self) -> Result<usize, RepositoryError> {
            self.check()?;
            self.storage.len().await
        }
    }
}

#[cfg(test)]
mod repository_tests {
    use super::*;
    use super::tests::MockVitalReadingRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_repository_round_trip() {
        let repo = VitalReadingRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        let record = VitalReadingRecord {
            id: "abc".to_string(),
            vital_type: "blood_sugar".to_string(),
            value: "120".to_string(),
            unit: "mg/dL".to_string(),
            timestamp: Utc::now(),
            status: "normal".to_string(),
            notes: Some("after lunch".to_string()),
        };
        repo.append(record.clone()).await.unwrap();

        assert_eq!(repo.get_by_id("abc").await.unwrap(), Some(record.clone()));
        assert_eq!(repo.get_all().await.unwrap(), vec![record]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock_reports_errors() {
        let repo = MockVitalReadingRepository::failing();
        assert!(repo.get_all().await.is_err());
        assert!(repo.count().await.is_err());
    }
}
