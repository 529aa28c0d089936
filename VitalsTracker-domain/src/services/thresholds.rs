use crate::entities::vitals::{Band, VitalRange, VitalStatus, VitalType};

/// Systolic bands; diastolic is recorded but never classified
pub const BLOOD_PRESSURE_SYSTOLIC: VitalRange = VitalRange {
    normal: Band::new(90.0, 120.0),
    warning: Band::new(121.0, 139.0),
    critical: Band::new(140.0, 180.0),
};

pub const BLOOD_SUGAR: VitalRange = VitalRange {
    normal: Band::new(80.0, 140.0),
    warning: Band::new(141.0, 199.0),
    critical: Band::new(200.0, 400.0),
};

pub const HEART_RATE: VitalRange = VitalRange {
    normal: Band::new(60.0, 100.0),
    warning: Band::new(101.0, 120.0),
    critical: Band::new(121.0, 200.0),
};

/// Range table for a vital type, `None` for types that are not classified.
///
/// Adding a `VitalType` variant must be decided here.
pub fn range_for(vital_type: VitalType) -> Option<VitalRange> {
    match vital_type {
        VitalType::BloodPressure => Some(BLOOD_PRESSURE_SYSTOLIC),
        VitalType::BloodSugar => Some(BLOOD_SUGAR),
        VitalType::HeartRate => Some(HEART_RATE),
        VitalType::Temperature | VitalType::Weight | VitalType::OxygenSaturation => None,
    }
}

/// Classify a value against its range table.
///
/// Normal band first, then warning, anything else is critical. Types
/// without a table are always normal.
pub fn classify(vital_type: VitalType, value: f64) -> VitalStatus {
    let Some(range) = range_for(vital_type) else {
        return VitalStatus::Normal;
    };

    if range.normal.contains(value) {
        VitalStatus::Normal
    } else if range.warning.contains(value) {
        VitalStatus::Warning
    } else {
        VitalStatus::Critical
    }
}
