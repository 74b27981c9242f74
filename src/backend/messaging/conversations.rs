//! Conversation Reconstruction
//!
//! Given a participant identifier, rebuild the conversation list that
//! participant sees: every conversation they are part of, most recent
//! first, each annotated with the resolved counterpart identity.
//!
//! # Failure policy
//!
//! A directory miss (or a directory lookup error) for one conversation
//! must not abort the batch. The affected entry degrades to empty
//! identity fields and the remaining conversations are returned intact.

use sqlx::SqlitePool;

use crate::backend::directory::ActorDirectory;
use crate::shared::messaging::{Conversation, ConversationView, CounterpartView};

use super::db;

/// All conversations for a participant, annotated with counterpart identity
pub async fn conversations_for(
    pool: &SqlitePool,
    directory: &ActorDirectory,
    identifier: &str,
) -> Result<Vec<ConversationView>, sqlx::Error> {
    let conversations = db::list_by_participant(pool, identifier).await?;

    let mut views = Vec::with_capacity(conversations.len());
    for conversation in &conversations {
        views.push(build_view(directory, conversation, identifier).await);
    }
    Ok(views)
}

async fn build_view(
    directory: &ActorDirectory,
    conversation: &Conversation,
    identifier: &str,
) -> ConversationView {
    // A self-pair or malformed pair yields an empty counterpart; this is a
    // documented edge case, not an error.
    let counterpart = match conversation.counterpart_of(identifier) {
        Some(counterpart_id) => resolve_counterpart(directory, counterpart_id).await,
        None => CounterpartView::default(),
    };

    ConversationView {
        counterpart,
        last_message: conversation.last_message.content.clone(),
        last_message_at: conversation.last_message.timestamp.to_rfc3339(),
    }
}

async fn resolve_counterpart(directory: &ActorDirectory, counterpart_id: &str) -> CounterpartView {
    match directory.resolve(counterpart_id).await {
        Ok(Some(identity)) => CounterpartView::from(&identity),
        Ok(None) => CounterpartView {
            // keep the raw identifier so the client can still open the
            // thread, everything else degrades to empty strings
            id: counterpart_id.to_string(),
            ..CounterpartView::default()
        },
        Err(e) => {
            tracing::warn!(counterpart_id, error = ?e, "counterpart resolution failed");
            CounterpartView {
                id: counterpart_id.to_string(),
                ..CounterpartView::default()
            }
        }
    }
}
