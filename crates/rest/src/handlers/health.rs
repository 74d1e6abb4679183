//! Health check endpoint handlers.
//!
//! Provides health endpoints for monitoring and load balancers.

use advocate_persistence::core::AdvocateStorage;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the backend's own health check.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server and storage are healthy
/// - `503 Service Unavailable` - Storage check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: AdvocateStorage + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.storage().backend_name();

    if let Err(e) = state.storage().health_check().await {
        warn!(backend = backend_name, error = %e, "Health check failed");
        return Err(RestError::ServiceUnavailable {
            message: format!("{} backend is unhealthy", backend_name),
        });
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
