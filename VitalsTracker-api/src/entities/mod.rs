// Public entities for the VitalsTracker API
// This module contains data structures that are shared across the application boundary

// Common entities for error handling, pagination, etc.
pub mod common;

// Vital readings and their evaluation
pub mod vitals;

// Health worker directory
pub mod workers;

// Landing dashboard
pub mod dashboard;
