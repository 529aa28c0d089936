// Repository module structure
pub mod errors;
mod in_memory;
mod vital_readings;
mod workers;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use vital_readings::{VitalReadingRepository, VitalReadingRepositoryTrait};
pub use workers::{sample_roster, HealthWorkerRepository, HealthWorkerRepositoryTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use vital_readings::tests;
