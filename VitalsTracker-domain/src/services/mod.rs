// Domain services
// This module contains business logic implementations.

pub mod directory;
pub mod evaluator;
pub mod insights;
pub mod thresholds;
pub mod vitals;

// Re-export service traits and factory functions
pub use directory::{create_default_directory_service, DirectoryService, DirectoryServiceError, DirectoryServiceTrait};
pub use evaluator::{Clock, IdSource, SubmissionOutcome, SystemClock, UuidIdSource, ValidationError, VitalsEvaluator};
pub use vitals::{
    create_default_vitals_service, Evaluation, ReadingFilter, VitalsService, VitalsServiceError, VitalsServiceTrait,
};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use vitals::create_mock_vitals_service;
