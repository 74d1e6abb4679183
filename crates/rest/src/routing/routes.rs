//! Route table.

use advocate_persistence::core::AdvocateStorage;
use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Path of the advocate listing.
pub const ADVOCATES_PATH: &str = "/api/advocates";

/// Creates all routes.
///
/// # Routes
///
/// - `GET /api/advocates` - Filtered, paginated advocate listing
/// - `GET /health` - Health check including storage
/// - `GET /_liveness` - Liveness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: AdvocateStorage + Send + Sync + 'static,
{
    Router::new()
        .route(ADVOCATES_PATH, get(handlers::list_advocates_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .with_state(state)
}
