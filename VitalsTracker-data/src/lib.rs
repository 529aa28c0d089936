// VitalsTracker Data
// This crate holds the storage models and in-memory repositories

// Data storage models
pub mod models;

// Repository implementations for data access
pub mod repository;
