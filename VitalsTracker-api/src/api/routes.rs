use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use vitals_tracker_data::repository::{HealthWorkerRepository, VitalReadingRepository};
use vitals_tracker_domain::health::HealthService;
use vitals_tracker_domain::services::{DirectoryService, VitalsService};

use crate::api::handlers::health::{self, HealthServiceHandle};
use crate::api::handlers::vitals::{self, VitalsServiceHandle};
use crate::api::handlers::workers::{self, DirectoryServiceHandle};
use crate::api::handlers::dashboard;
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub vitals: VitalsServiceHandle,
    pub directory: DirectoryServiceHandle,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(vitals: VitalsServiceHandle, directory: DirectoryServiceHandle, config: AppConfig) -> Self {
        Self {
            vitals,
            directory,
            config: Arc::new(config),
        }
    }
}

/// Build services over fresh in-memory storage and create the application router
pub async fn create_app(config: AppConfig) -> Router {
    debug!("Creating application router");

    let readings = VitalReadingRepository::new();
    let workers = HealthWorkerRepository::with_sample_roster();

    let vitals_service = VitalsService::new(readings.clone());
    if config.seed_sample_data {
        // The app still serves requests with an empty history
        if let Err(e) = vitals_service.seed_sample_readings().await {
            error!("Failed to seed sample readings: {}", e);
        }
    }

    let directory_service = DirectoryService::new(workers.clone());
    let health_service: HealthServiceHandle = Arc::new(HealthService::new(readings, workers));

    let state = AppState::new(Arc::new(vitals_service), Arc::new(directory_service), config);
    create_router(state, health_service)
}

/// Assemble routes, documentation and middleware around the given state
pub fn create_router(state: AppState, health_service: HealthServiceHandle) -> Router {
    // Define specific routes before parametrized routes to avoid conflicts
    let api_routes = Router::new()
        .route("/vitals", get(vitals::get_reading_history).post(vitals::submit_reading))
        .route("/vitals/evaluate", post(vitals::evaluate_reading))
        .route("/vitals/summary", get(vitals::get_vitals_summary))
        .route("/vitals/ranges", get(vitals::get_vital_ranges))
        .route("/vitals/:id", get(vitals::get_reading))
        .route("/workers", get(workers::search_workers))
        .route("/workers/languages", get(workers::get_worker_languages))
        .route("/workers/:id", get(workers::get_worker))
        .route("/dashboard", get(dashboard::get_dashboard));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    debug!("API routes nested");

    let app = add_swagger_ui(app);

    // Initialize health check service startup time
    health::initialize_server_start_time();

    configure_middleware(app)
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}

/// Request tracing, CORS and security headers for the whole application
pub fn configure_middleware(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    app.layer(cors)
        .layer(security_headers)
        .layer(TraceLayer::new_for_http())
}
