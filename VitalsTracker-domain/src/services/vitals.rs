use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::entities::conversions;
use crate::entities::notification::Notification;
use crate::entities::vitals::{PendingInput, Reading, VitalStatus, VitalType, VitalsSummary};
use crate::services::evaluator::{
    Clock, IdSource, SubmissionOutcome, SystemClock, UuidIdSource, ValidationError, VitalsEvaluator,
};
use crate::services::insights;
use vitals_tracker_data::models::ReadingQuery;
use vitals_tracker_data::repository::{RepositoryError, VitalReadingRepository, VitalReadingRepositoryTrait};

/// Vitals service errors
#[derive(Debug, Error)]
pub enum VitalsServiceError {
    /// Input was rejected by the evaluator
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Not found error
    #[error("Reading not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

impl VitalsServiceError {
    /// Notification for the presentation layer, when the error is user-facing
    pub fn notification(&self) -> Option<Notification> {
        match self {
            VitalsServiceError::Validation(err) => Some(Notification::from(err)),
            _ => None,
        }
    }
}

impl From<RepositoryError> for VitalsServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => VitalsServiceError::NotFound(msg),
            other => VitalsServiceError::Repository(other.to_string()),
        }
    }
}

/// History listing criteria
#[derive(Debug, Clone, Default)]
pub struct ReadingFilter {
    pub vital_type: Option<VitalType>,
    pub status: Option<VitalStatus>,
    /// Only readings recorded at or after this instant
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Result of evaluating an input without storing it
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub vital_type: VitalType,
    pub value: String,
    pub unit: String,
    pub status: VitalStatus,
}

/// Trait for vitals service operations
#[async_trait]
pub trait VitalsServiceTrait: Send + Sync {
    /// Validate and classify an input without recording it
    fn evaluate(&self, input: &PendingInput) -> Result<Evaluation, VitalsServiceError>;

    /// Run the submission workflow and record the reading when it is accepted
    async fn submit_reading(&self, input: PendingInput) -> Result<SubmissionOutcome, VitalsServiceError>;

    /// Get a reading by ID
    async fn get_reading_by_id(&self, id: &str) -> Result<Reading, VitalsServiceError>;

    /// Get a page of readings, most recent first, with the total match count
    async fn get_filtered_readings(&self, filter: ReadingFilter) -> Result<(Vec<Reading>, usize), VitalsServiceError>;

    /// Summarize the history with alerts counted over `window_days`
    async fn get_summary(&self, window_days: u32) -> Result<VitalsSummary, VitalsServiceError>;
}

/// Vitals service backed by a reading repository
pub struct VitalsService<R, I = UuidIdSource, C = SystemClock> {
    repository: R,
    evaluator: VitalsEvaluator<I, C>,
}

impl<R: VitalReadingRepositoryTrait> VitalsService<R> {
    /// Create a new vitals service using the default identity and clock
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            evaluator: VitalsEvaluator::new(),
        }
    }
}

impl<R: VitalReadingRepositoryTrait, I: IdSource, C: Clock> VitalsService<R, I, C> {
    /// Create a vitals service with an explicit evaluator
    pub fn with_evaluator(repository: R, evaluator: VitalsEvaluator<I, C>) -> Self {
        Self { repository, evaluator }
    }

    /// Record sample readings relative to the evaluator's clock.
    ///
    /// Samples go through the evaluator so their status is derived.
    pub async fn seed_sample_readings(&self) -> Result<usize, VitalsServiceError> {
        let now = self.evaluator.now();
        let samples = [
            (PendingInput::blood_pressure("140", "90"), Duration::hours(2)),
            (PendingInput::single(VitalType::BloodSugar, "120"), Duration::hours(4)),
            (PendingInput::single(VitalType::HeartRate, "78"), Duration::hours(6)),
        ];

        for (input, age) in &samples {
            let reading = self.evaluator.create_reading_at(input, now - *age)?;
            self.repository.append(conversions::convert_to_data_reading(&reading)).await?;
        }

        info!("Seeded {} sample readings", samples.len());
        Ok(samples.len())
    }

    fn to_domain(&self, record: vitals_tracker_data::models::VitalReadingRecord) -> Result<Reading, VitalsServiceError> {
        conversions::convert_to_domain_reading(record).map_err(|e| {
            error!("Stored reading could not be converted: {}", e);
            VitalsServiceError::Repository(e)
        })
    }
}

#[async_trait]
impl<R, I, C> VitalsServiceTrait for VitalsService<R, I, C>
where
    R: VitalReadingRepositoryTrait,
    I: IdSource,
    C: Clock,
{
    fn evaluate(&self, input: &PendingInput) -> Result<Evaluation, VitalsServiceError> {
        let normalized = self.evaluator.validate(input)?;
        let status = self.evaluator.classify(input.vital_type, normalized.classification_value());

        Ok(Evaluation {
            vital_type: input.vital_type,
            value: normalized.display_text().to_string(),
            unit: input.vital_type.unit().to_string(),
            status,
        })
    }

    async fn submit_reading(&self, input: PendingInput) -> Result<SubmissionOutcome, VitalsServiceError> {
        let outcome = self.evaluator.submit(input);

        match &outcome {
            SubmissionOutcome::Saved { reading, .. } => {
                self.repository.append(conversions::convert_to_data_reading(reading)).await?;
                info!(id = %reading.id, status = %reading.status, "{} reading recorded", reading.vital_type.display_name());
            }
            SubmissionOutcome::Rejected { error, .. } => {
                warn!("Reading rejected: {}", error);
            }
        }

        Ok(outcome)
    }

    async fn get_reading_by_id(&self, id: &str) -> Result<Reading, VitalsServiceError> {
        let record = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| VitalsServiceError::NotFound(format!("Reading with ID {} not found", id)))?;

        self.to_domain(record)
    }

    async fn get_filtered_readings(&self, filter: ReadingFilter) -> Result<(Vec<Reading>, usize), VitalsServiceError> {
        let query = ReadingQuery {
            vital_type: filter.vital_type.map(|t| t.as_str().to_string()),
            status: filter.status.map(|s| s.as_str().to_string()),
            since: filter.since,
            limit: filter.limit,
            offset: filter.offset,
        };

        let (records, total) = self.repository.get_filtered(query).await?;
        let readings = records
            .into_iter()
            .map(|r| self.to_domain(r))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((readings, total))
    }

    async fn get_summary(&self, window_days: u32) -> Result<VitalsSummary, VitalsServiceError> {
        let readings = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .map(|r| self.to_domain(r))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(insights::summarize(&readings, self.evaluator.now(), window_days))
    }
}

/// Create a default vitals service over an empty in-memory repository
pub fn create_default_vitals_service() -> VitalsService<VitalReadingRepository> {
    VitalsService::new(VitalReadingRepository::new())
}

/// Create a vitals service over a mock repository with deterministic ids and time
#[cfg(feature = "mock")]
pub fn create_mock_vitals_service() -> impl VitalsServiceTrait + Send + Sync {
    use crate::testing::{FixedClock, MockVitalReadingRepository, SequentialIdSource};

    VitalsService::with_evaluator(
        MockVitalReadingRepository::new(),
        VitalsEvaluator::with_sources(SequentialIdSource::default(), FixedClock::default()),
    )
}
