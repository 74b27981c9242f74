//! Messaging HTTP Handlers
//!
//! This module contains the HTTP handlers for the messaging surface:
//!
//! - `POST /api/messages` - append a message and update the conversation index
//! - `GET /api/messages` - ordered history between two identifiers
//! - `GET /api/conversations` - a participant's conversation list
//! - `GET /api/admins` - the admin/superadmin roster the client messages
//!
//! Handlers return `Result<_, BackendError>`; every failure is converted to
//! a structured JSON body by the error module. The legacy mobile clients
//! are inconsistent about casing, so the request DTOs tolerate the old
//! spellings on read while responses always use camelCase.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::messaging::{
    AdminSummary, ConversationView, MessageView, SendMessageRequest, SendMessageResponse,
};

use super::{conversations_for, db};

fn require_pool(pool: &Option<SqlitePool>) -> Result<&SqlitePool, BackendError> {
    pool.as_ref().ok_or(BackendError::StorageUnavailable)
}

/// Send a message
///
/// Appends to the message store, then records the message in the
/// conversation index. The two writes are independently retryable: the
/// index update is an idempotent upsert keyed on the canonical pair.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>), BackendError> {
    let pool = require_pool(&state.db_pool)?;
    let directory = state
        .directory
        .as_ref()
        .ok_or(BackendError::StorageUnavailable)?;

    let sender_id = request.sender_id.unwrap_or_default();
    let receiver_id = request.receiver_id.unwrap_or_default();
    let content = request.content.unwrap_or_default();

    let message = db::append(pool, &sender_id, &receiver_id, &content).await?;
    tracing::debug!(message_id = %message.id, "message appended");

    db::record_message(
        pool,
        directory,
        &message.sender_id,
        &message.receiver_id,
        &message.content,
        message.created_at,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            message: "Message sent successfully".to_string(),
        }),
    ))
}

/// Query parameters for `GET /api/messages`
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub user1: Option<String>,
    pub user2: Option<String>,
}

/// Get the ordered message history between two identifiers
pub async fn get_messages(
    State(pool): State<Option<SqlitePool>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<MessageView>>, BackendError> {
    let pool = require_pool(&pool)?;

    let user1 = params
        .user1
        .filter(|u| !u.is_empty())
        .ok_or_else(|| BackendError::validation("user1", "is required"))?;
    let user2 = params
        .user2
        .filter(|u| !u.is_empty())
        .ok_or_else(|| BackendError::validation("user2", "is required"))?;

    let messages = db::history(pool, &user1, &user2).await?;
    Ok(Json(messages.iter().map(MessageView::from).collect()))
}

/// Query parameters for `GET /api/conversations`
///
/// `employeeId` is the parameter name the first mobile release shipped
/// with; it is kept as an alias of `participantId`.
#[derive(Debug, Deserialize)]
pub struct ConversationsParams {
    #[serde(rename = "participantId")]
    pub participant_id: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<String>,
}

/// Get the conversation list for a participant
///
/// An absent or unknown identifier yields an empty array with 200; there
/// is nothing to distinguish "no conversations yet" from "never seen".
pub async fn get_conversations(
    State(state): State<AppState>,
    Query(params): Query<ConversationsParams>,
) -> Result<Json<Vec<ConversationView>>, BackendError> {
    let pool = require_pool(&state.db_pool)?;
    let directory = state
        .directory
        .as_ref()
        .ok_or(BackendError::StorageUnavailable)?;

    let identifier = params
        .participant_id
        .or(params.employee_id)
        .filter(|id| !id.is_empty());
    let Some(identifier) = identifier else {
        return Ok(Json(Vec::new()));
    };

    let views = conversations_for(pool, directory, &identifier).await?;
    Ok(Json(views))
}

/// Query parameters for `GET /api/admins`
#[derive(Debug, Deserialize)]
pub struct AdminRosterParams {
    #[serde(rename = "locationId")]
    pub location_id: Option<String>,
    #[serde(rename = "departementId")]
    pub departement_id: Option<String>,
}

/// Get the admin + superadmin roster, optionally filtered
///
/// Filters compare as strings on purpose: older admin records store
/// location/department references in more than one format.
pub async fn get_admins(
    State(pool): State<Option<SqlitePool>>,
    Query(params): Query<AdminRosterParams>,
) -> Result<Json<Vec<AdminSummary>>, BackendError> {
    let pool = require_pool(&pool)?;

    let staff = crate::backend::directory::db::list_admin_staff(pool).await?;

    let matches = |identity: &crate::shared::messaging::ActorIdentity| {
        if let Some(location) = &params.location_id {
            if &identity.location_id != location {
                return false;
            }
        }
        if let Some(departement) = &params.departement_id {
            if &identity.department_id != departement {
                return false;
            }
        }
        true
    };

    let roster: Vec<AdminSummary> = staff
        .iter()
        .filter(|identity| matches(identity))
        .map(AdminSummary::from)
        .collect();

    Ok(Json(roster))
}

/// Liveness probe
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Mobile app backend is running" }))
}
