//! Router Configuration
//!
//! This module provides the main router creation function that combines
//! the API routes and the cross-cutting middleware layers into a single
//! Axum router.
//!
//! # Middleware
//!
//! - permissive CORS: the mobile client is served from a different origin
//! - HTTP tracing: one span per request via `tower_http::trace`
//!
//! Unknown routes fall through to a plain 404 handler.

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool and actor directory)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
