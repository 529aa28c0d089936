pub mod health_worker;
pub mod vital_reading;

pub use health_worker::HealthWorkerRecord;
pub use vital_reading::{ReadingQuery, VitalReadingRecord};
