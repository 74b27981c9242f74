//! API Route Handlers
//!
//! This module wires the `/api` endpoints to their handlers.
//!
//! # Routes
//!
//! ## Messaging
//! - `POST /api/messages` - send a message
//! - `GET /api/messages?user1=&user2=` - message history between two users
//! - `GET /api/conversations?participantId=` - conversation list
//!
//! ## Directory
//! - `GET /api/admins` - admin/superadmin roster
//!
//! ## Operational
//! - `GET /api/health` - liveness probe

use axum::routing::get;
use axum::Router;

use crate::backend::messaging::handlers::{
    get_admins, get_conversations, get_messages, health_check, send_message,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/messages", get(get_messages).post(send_message))
        .route("/api/conversations", get(get_conversations))
        .route("/api/admins", get(get_admins))
        .route("/api/health", get(health_check))
}
