//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;
use vitals_tracker_data::repository::{HealthWorkerRepositoryTrait, VitalReadingRepositoryTrait};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced functionality
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Overall status is the worst component status
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health checks over the reading store and the worker directory
#[derive(Debug, Clone)]
pub struct HealthService<R, W> {
    readings: R,
    workers: W,
}

impl<R: VitalReadingRepositoryTrait, W: HealthWorkerRepositoryTrait> HealthService<R, W> {
    pub fn new(readings: R, workers: W) -> Self {
        Self { readings, workers }
    }

    async fn check_storage(&self) -> HealthComponent {
        match self.readings.count().await {
            Ok(count) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(format!("{} readings stored", count)),
            },
            Err(e) => {
                warn!("Reading storage health check failed: {}", e);
                HealthComponent {
                    status: ComponentStatus::Unhealthy,
                    details: Some(e.to_string()),
                }
            }
        }
    }

    async fn check_directory(&self) -> HealthComponent {
        match self.workers.get_all().await {
            Ok(workers) if workers.is_empty() => HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("No health workers listed".to_string()),
            },
            Ok(workers) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(format!("{} health workers listed", workers.len())),
            },
            Err(e) => {
                warn!("Directory health check failed: {}", e);
                HealthComponent {
                    status: ComponentStatus::Unhealthy,
                    details: Some(e.to_string()),
                }
            }
        }
    }
}

#[async_trait]
impl<R, W> HealthServiceTrait for HealthService<R, W>
where
    R: VitalReadingRepositoryTrait,
    W: HealthWorkerRepositoryTrait,
{
    async fn get_system_health(&self) -> SystemHealth {
        let components = vec![
            ("storage".to_string(), self.check_storage().await),
            ("directory".to_string(), self.check_directory().await),
        ]
        .into_iter()
        .collect();

        SystemHealth::from_components(components)
    }
}
