//! Database operations for messages and conversations
//!
//! This module contains the message store (append-only log with ordered
//! pair history) and the conversation index (one aggregate row per
//! unordered participant pair, maintained by an atomic upsert).
//!
//! # Concurrency
//!
//! Requests are handled independently with no in-process coordination, so
//! the find-or-create of a conversation must not be a read-then-write
//! sequence: two concurrent first-messages for the same pair would both
//! observe "not found" and both insert. The index instead relies on the
//! storage-level uniqueness of the sorted pair and performs
//! `INSERT .. ON CONFLICT DO UPDATE` in a single statement. Retrying
//! `record_message` with the same inputs converges to the same row.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::backend::directory::ActorDirectory;
use crate::backend::error::BackendError;
use crate::shared::messaging::{
    canonical_pair, Conversation, LastMessage, Message, PeerSnapshot,
};

/// Append a message to the store
///
/// Fails with a validation error when any of the three inputs is empty;
/// validation failures never reach storage. The stored record is immutable.
pub async fn append(
    pool: &SqlitePool,
    sender_id: &str,
    receiver_id: &str,
    content: &str,
) -> Result<Message, BackendError> {
    for (field, value) in [
        ("senderId", sender_id),
        ("receiverId", receiver_id),
        ("content", content),
    ] {
        if value.is_empty() {
            return Err(BackendError::validation(field, "must not be empty"));
        }
    }

    let id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO messages (id, sender_id, receiver_id, content, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id.to_string())
    .bind(sender_id)
    .bind(receiver_id)
    .bind(content)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Message {
        id,
        seq: result.last_insert_rowid(),
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        content: content.to_string(),
        created_at: now,
    })
}

/// Ordered message history between two identifiers
///
/// Symmetric in its arguments and ascending by timestamp, with the
/// insertion sequence as a stable tie-break. An unknown pair yields an
/// empty vector, never an error.
pub async fn history(
    pool: &SqlitePool,
    user1: &str,
    user2: &str,
) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT seq, id, sender_id, receiver_id, content, created_at
        FROM messages
        WHERE (sender_id = $1 AND receiver_id = $2)
           OR (sender_id = $2 AND receiver_id = $1)
        ORDER BY created_at ASC, seq ASC
        "#,
    )
    .bind(user1)
    .bind(user2)
    .fetch_all(pool)
    .await?;

    rows.iter().map(message_from_row).collect()
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Message, sqlx::Error> {
    let id: String = row.get("id");
    let id = Uuid::parse_str(&id)
        .map_err(|e| sqlx::Error::Decode(format!("invalid message id: {}", e).into()))?;

    Ok(Message {
        id,
        seq: row.get("seq"),
        sender_id: row.get("sender_id"),
        receiver_id: row.get("receiver_id"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    })
}

/// Record a message in the conversation index
///
/// The central write path, invoked once per successful `append`:
///
/// 1. compute the canonical pair key (sorted, direction-independent),
/// 2. when no row exists yet, resolve a best-effort employee snapshot for
///    whichever participant the directory can identify,
/// 3. upsert atomically: insert the new aggregate, or update the
///    last-message snapshot and `updated_at` of the existing one.
///
/// A failed snapshot resolution stores a null snapshot, not an error.
pub async fn record_message(
    pool: &SqlitePool,
    directory: &ActorDirectory,
    sender_id: &str,
    receiver_id: &str,
    content: &str,
    sent_at: DateTime<Utc>,
) -> Result<(), BackendError> {
    let (low, high) = canonical_pair(sender_id, receiver_id);

    // Only a first message needs the peer snapshot; skip directory probes
    // for the common case of an existing conversation. Correctness does not
    // depend on this read: the upsert below is atomic either way.
    let exists = find_by_pair(pool, &low, &high).await?.is_some();
    let peer_snapshot = if exists {
        None
    } else {
        resolve_peer_snapshot(directory, sender_id, receiver_id).await
    };
    let peer_snapshot_json = match &peer_snapshot {
        Some(snapshot) => Some(serde_json::to_string(snapshot)?),
        None => None,
    };

    sqlx::query(
        r#"
        INSERT INTO conversations
            (participant_low, participant_high, id, last_sender_id, last_content,
             last_message_at, peer_snapshot, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (participant_low, participant_high) DO UPDATE SET
            last_sender_id = excluded.last_sender_id,
            last_content = excluded.last_content,
            last_message_at = excluded.last_message_at,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&low)
    .bind(&high)
    .bind(Uuid::new_v4().to_string())
    .bind(sender_id)
    .bind(content)
    .bind(sent_at)
    .bind(peer_snapshot_json)
    .bind(sent_at)
    .bind(sent_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolve the employee side of a new conversation, best-effort
///
/// Tries the sender first, then the receiver. Lookup errors are absorbed:
/// a conversation with no snapshot is valid, a failed message send over a
/// directory hiccup is not.
async fn resolve_peer_snapshot(
    directory: &ActorDirectory,
    sender_id: &str,
    receiver_id: &str,
) -> Option<PeerSnapshot> {
    for identifier in [sender_id, receiver_id] {
        match directory.resolve_employee(identifier).await {
            Ok(Some(identity)) => return Some(PeerSnapshot::from(&identity)),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(identifier, error = ?e, "peer snapshot resolution failed");
            }
        }
    }
    None
}

/// Look up the conversation for a canonical pair
pub async fn find_by_pair(
    pool: &SqlitePool,
    low: &str,
    high: &str,
) -> Result<Option<Conversation>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT participant_low, participant_high, id, last_sender_id, last_content,
               last_message_at, peer_snapshot, created_at, updated_at
        FROM conversations
        WHERE participant_low = $1 AND participant_high = $2
        "#,
    )
    .bind(low)
    .bind(high)
    .fetch_optional(pool)
    .await?;

    row.map(|row| conversation_from_row(&row)).transpose()
}

/// All conversations an identifier participates in, most recent first
pub async fn list_by_participant(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Vec<Conversation>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT participant_low, participant_high, id, last_sender_id, last_content,
               last_message_at, peer_snapshot, created_at, updated_at
        FROM conversations
        WHERE participant_low = $1 OR participant_high = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(identifier)
    .fetch_all(pool)
    .await?;

    rows.iter().map(conversation_from_row).collect()
}

fn conversation_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Conversation, sqlx::Error> {
    let id: String = row.get("id");
    let id = Uuid::parse_str(&id)
        .map_err(|e| sqlx::Error::Decode(format!("invalid conversation id: {}", e).into()))?;

    // Historic documents may carry older snapshot field spellings; the
    // PeerSnapshot aliases absorb them. A snapshot that fails to parse
    // degrades to None rather than poisoning the whole row.
    let peer_snapshot = row
        .get::<Option<String>, _>("peer_snapshot")
        .and_then(|json| match serde_json::from_str(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unparseable peer snapshot");
                None
            }
        });

    let last_message_at: DateTime<Utc> = row.get("last_message_at");

    Ok(Conversation {
        id,
        participant_low: row.get("participant_low"),
        participant_high: row.get("participant_high"),
        last_message: LastMessage {
            sender_id: row.get("last_sender_id"),
            content: row.get("last_content"),
            timestamp: last_message_at,
        },
        peer_snapshot,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
