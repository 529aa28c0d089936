use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::entities::vitals::{Reading, VitalStatus, VitalType, VitalsSummary};

/// Consecutive days with a reading, counting back from `today`.
///
/// A day without readings yet does not break the streak until it is over,
/// so counting starts from yesterday when today has none.
pub fn logging_streak(readings: &[Reading], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = readings.iter().map(|r| r.timestamp.date_naive()).collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Summarize readings as of `now`, counting alerts in the last `window_days`
pub fn summarize(readings: &[Reading], now: DateTime<Utc>, window_days: u32) -> VitalsSummary {
    let window_start = now - Duration::days(i64::from(window_days));

    let count = |status: VitalStatus| readings.iter().filter(|r| r.status == status).count();

    let alerts_in_window = readings
        .iter()
        .filter(|r| r.status.is_alert() && r.timestamp >= window_start && r.timestamp <= now)
        .count();

    let latest_by_type = VitalType::ALL
        .into_iter()
        .filter_map(|vital_type| {
            readings
                .iter()
                .filter(|r| r.vital_type == vital_type)
                .max_by_key(|r| r.timestamp)
                .cloned()
        })
        .collect();

    VitalsSummary {
        total_readings: readings.len(),
        normal_count: count(VitalStatus::Normal),
        warning_count: count(VitalStatus::Warning),
        critical_count: count(VitalStatus::Critical),
        alerts_in_window,
        window_days,
        logging_streak_days: logging_streak(readings, now.date_naive()),
        latest_by_type,
        generated_at: now,
    }
}
