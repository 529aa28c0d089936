use std::sync::{Arc, RwLock};

use crate::models::vital_reading::{ReadingQuery, VitalReadingRecord};
use super::errors::RepositoryError;

/// In-memory storage for vital readings.
///
/// Records are kept ordered by timestamp, most recent first. Clones share
/// the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    readings: Arc<RwLock<Vec<VitalReadingRecord>>>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading at its position in the recency order
    pub async fn store_reading(&self, reading: &VitalReadingRecord) -> Result<VitalReadingRecord, RepositoryError> {
        let mut store = self.readings.write()?;

        if store.iter().any(|r| r.id == reading.id) {
            return Err(RepositoryError::Validation(format!(
                "duplicate reading id {}",
                reading.id
            )));
        }

        // Ties go in front so the newest submission is listed first
        let index = store.partition_point(|r| r.timestamp > reading.timestamp);
        store.insert(index, reading.clone());
        Ok(reading.clone())
    }

    /// Get all readings, most recent first
    pub async fn get_all(&self) -> Result<Vec<VitalReadingRecord>, RepositoryError> {
        let store = self.readings.read()?;
        Ok(store.clone())
    }

    /// Get a reading by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<VitalReadingRecord>, RepositoryError> {
        let store = self.readings.read()?;
        Ok(store.iter().find(|r| r.id == id).cloned())
    }

    /// Get a filtered page of readings and the total number of matches
    pub async fn get_filtered(&self, query: &ReadingQuery) -> Result<(Vec<VitalReadingRecord>, usize), RepositoryError> {
        let store = self.readings.read()?;

        let matching: Vec<&VitalReadingRecord> = store.iter().filter(|r| query.matches(r)).collect();
        let total = matching.len();
        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(total);

        let page = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok((page, total))
    }

    /// Number of stored readings
    pub async fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.readings.read()?.len())
    }
}
