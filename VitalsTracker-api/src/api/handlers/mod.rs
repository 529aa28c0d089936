pub mod dashboard;
pub mod health;
pub mod vitals;
pub mod workers;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use dashboard::get_dashboard;
pub use health::health_check;
pub use vitals::{evaluate_reading, get_reading, get_reading_history, get_vital_ranges, get_vitals_summary, submit_reading};
pub use workers::{get_worker, get_worker_languages, search_workers};
