use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vitals_tracker_domain::entities::{HealthWorker, Reading};

/// At-a-glance numbers for the landing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuickStats {
    pub total_readings: usize,
    /// Warning and critical readings within the alert window
    pub alerts_in_window: usize,
    pub window_days: u32,
    pub available_workers: usize,
    pub logging_streak_days: u32,
}

/// Landing page view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    /// Most recent readings first
    pub recent_readings: Vec<Reading>,
    /// Nearest available health workers
    pub nearby_workers: Vec<HealthWorker>,
    pub quick_stats: QuickStats,
}
