// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use vitals_tracker_data::repository::tests::MockVitalReadingRepository;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::evaluator::{Clock, IdSource};

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Identifiers `reading-1`, `reading-2`, ... in call order
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("reading-{}", n)
    }
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug, Clone)]
pub struct MockHealthService {
    status: ComponentStatus,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock reporting every component healthy
    pub fn new() -> Self {
        Self {
            status: ComponentStatus::Healthy,
        }
    }

    /// Configure the mock to report the storage component with the given status
    pub fn with_storage_status(mut self, status: ComponentStatus) -> Self {
        self.status = status;
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert(
            "storage".to_string(),
            HealthComponent {
                status: self.status.clone(),
                details: Some("Mock storage".to_string()),
            },
        );
        SystemHealth::from_components(components)
    }
}
