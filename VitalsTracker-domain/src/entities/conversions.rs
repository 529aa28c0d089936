use crate::entities::vitals::{Reading, VitalStatus, VitalType};
use crate::entities::worker::{HealthWorker, WorkerRole};
use vitals_tracker_data::models::{HealthWorkerRecord, VitalReadingRecord};

// Conversion functions between domain entities and data models.
// These functions follow the pattern convert_to_[target_layer]_[model_name].

/// Convert a domain reading into its storage model
pub fn convert_to_data_reading(reading: &Reading) -> VitalReadingRecord {
    VitalReadingRecord {
        id: reading.id.clone(),
        vital_type: reading.vital_type.as_str().to_string(),
        value: reading.value.clone(),
        unit: reading.unit.clone(),
        timestamp: reading.timestamp,
        status: reading.status.as_str().to_string(),
        notes: reading.notes.clone(),
    }
}

/// Convert a stored reading back into the domain entity.
///
/// Fails when the stored type or status keys are not recognised.
pub fn convert_to_domain_reading(record: VitalReadingRecord) -> Result<Reading, String> {
    let vital_type: VitalType = record.vital_type.parse()?;
    let status: VitalStatus = record.status.parse()?;

    Ok(Reading {
        id: record.id,
        vital_type,
        value: record.value,
        unit: record.unit,
        timestamp: record.timestamp,
        status,
        notes: record.notes,
    })
}

/// Convert a roster record into the domain entity
pub fn convert_to_domain_worker(record: HealthWorkerRecord) -> Result<HealthWorker, String> {
    let role: WorkerRole = record.role.parse()?;

    Ok(HealthWorker {
        id: record.id,
        name: record.name,
        role,
        specialization: record.specialization,
        location: record.location,
        distance_km: record.distance_km,
        rating: record.rating,
        total_reviews: record.total_reviews,
        available: record.available,
        languages: record.languages,
        experience: record.experience,
        next_available: record.next_available,
        consultation_fee: record.consultation_fee,
    })
}
