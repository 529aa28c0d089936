// Domain entities and value objects
pub mod conversions;
pub mod notification;
pub mod vitals;
pub mod worker;

// Re-export common types for easier imports
pub use notification::{Notification, NotificationVariant};
pub use vitals::{Band, NormalizedValue, PendingInput, Reading, VitalRange, VitalStatus, VitalType, VitalsSummary};
pub use worker::{HealthWorker, WorkerFilter, WorkerRole};
