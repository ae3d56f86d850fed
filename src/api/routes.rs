//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, consultation_routes, me_routes, medical_record_routes, patient_routes,
    professional_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::MSG_ROUTE_NOT_FOUND;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Everything here requires a valid bearer token for an existing user
    let protected = Router::new()
        .merge(me_routes())
        .merge(patient_routes())
        .merge(professional_routes())
        .merge(consultation_routes())
        .merge(medical_record_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(auth_routes())
        .merge(protected)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Clinic Records API"
}

async fn route_not_found() -> AppError {
    AppError::NotFound(MSG_ROUTE_NOT_FOUND)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, database) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let response = HealthResponse {
        status: database.status,
        database,
    };

    (status_code, Json(response))
}
