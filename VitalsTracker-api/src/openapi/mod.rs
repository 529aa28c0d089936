use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vitals endpoints
        crate::api::handlers::vitals::submit_reading,
        crate::api::handlers::vitals::evaluate_reading,
        crate::api::handlers::vitals::get_reading_history,
        crate::api::handlers::vitals::get_vitals_summary,
        crate::api::handlers::vitals::get_vital_ranges,
        crate::api::handlers::vitals::get_reading,

        // Directory endpoints
        crate::api::handlers::workers::search_workers,
        crate::api::handlers::workers::get_worker_languages,
        crate::api::handlers::workers::get_worker,

        // Dashboard
        crate::api::handlers::dashboard::get_dashboard
    ),
    components(
        schemas(
            // Domain entities
            vitals_tracker_domain::entities::Reading,
            vitals_tracker_domain::entities::VitalType,
            vitals_tracker_domain::entities::VitalStatus,
            vitals_tracker_domain::entities::VitalRange,
            vitals_tracker_domain::entities::Band,
            vitals_tracker_domain::entities::VitalsSummary,
            vitals_tracker_domain::entities::Notification,
            vitals_tracker_domain::entities::NotificationVariant,
            vitals_tracker_domain::entities::HealthWorker,
            vitals_tracker_domain::entities::WorkerRole,

            // Public entities
            crate::entities::common::ErrorResponse,
            crate::entities::common::ReadingPage,
            crate::entities::vitals::SubmitReadingRequest,
            crate::entities::vitals::SubmitReadingResponse,
            crate::entities::vitals::EvaluationResponse,
            crate::entities::vitals::RangeEntry,
            crate::entities::dashboard::DashboardResponse,
            crate::entities::dashboard::QuickStats,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vital reading logging, history and classification"),
        (name = "workers", description = "Health worker directory"),
        (name = "dashboard", description = "Landing page view")
    ),
    info(
        title = "VitalsTracker API",
        version = "0.1.0",
        description = "API for logging vital signs and finding nearby health workers",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "VitalsTracker API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "vitals"));
        assert!(tags.iter().any(|tag| tag.name == "workers"));

        for path in [
            "/health",
            "/api/v1/vitals",
            "/api/v1/vitals/evaluate",
            "/api/v1/vitals/summary",
            "/api/v1/vitals/ranges",
            "/api/v1/vitals/{id}",
            "/api/v1/workers",
            "/api/v1/workers/languages",
            "/api/v1/workers/{id}",
            "/api/v1/dashboard",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_schema_components_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.expect("components should be defined").schemas;
        assert!(schemas.contains_key("Reading"));
        assert!(schemas.contains_key("ReadingPage"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
