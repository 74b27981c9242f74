//! Server Initialization
//!
//! This module handles the initialization of the Axum HTTP server:
//! loading the database pool, building the application state and
//! assembling the router.
//!
//! # Initialization Process
//!
//! 1. Load the optional database pool (and run migrations)
//! 2. Build `AppState` (pool + actor directory)
//! 3. Create the router with all routes and middleware
//!
//! # Error Handling
//!
//! Initialization is resilient: a missing database is logged and the
//! server starts with storage features disabled.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing StaffLink backend server");

    let db_pool = load_database().await;
    let app_state = AppState::new(db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
