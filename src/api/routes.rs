//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, lookup_handler, ping_handler, upsert_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// `/person/` is routed to the lookup handler as well so a request with
/// an empty identifier segment gets a 400 rather than a 404. The wildcard
/// lets nested or trailing-slash paths reach the handler, which picks the
/// last segment.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ping_handler))
        .route("/person", post(upsert_handler))
        .route("/person/", get(lookup_handler))
        .route("/person/*rest", get(lookup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
