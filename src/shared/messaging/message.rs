//! Message Data Structures
//!
//! A message is an immutable record: sender identifier, receiver identifier,
//! text content, creation timestamp. Messages are created once by the message
//! store and never mutated or deleted.
//!
//! Sender and receiver identifiers are untyped strings. They may be either an
//! actor's surrogate key or its business key; the ambiguity is a property of
//! the upstream data and is resolved lazily by the actor directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored message between two participants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message ID
    pub id: Uuid,
    /// Monotone insertion sequence, the stable tie-break for equal timestamps
    pub seq: i64,
    /// Sender identifier (surrogate or business key)
    pub sender_id: String,
    /// Receiver identifier (surrogate or business key)
    pub receiver_id: String,
    /// Message text
    pub content: String,
    /// Creation time (UTC)
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a message as returned by `GET /api/messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    /// RFC3339 timestamp
    pub timestamp: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.clone(),
            receiver_id: message.receiver_id.clone(),
            content: message.content.clone(),
            timestamp: message.created_at.to_rfc3339(),
        }
    }
}

/// Request body for `POST /api/messages`
///
/// The deployed mobile clients are inconsistent about field naming, so both
/// camelCase and snake_case spellings are accepted on read (`content` also
/// arrives as `message` from the oldest client builds). New writes and all
/// responses use camelCase only.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(rename = "senderId", alias = "sender_id")]
    pub sender_id: Option<String>,
    #[serde(rename = "receiverId", alias = "receiver_id")]
    pub receiver_id: Option<String>,
    #[serde(alias = "message")]
    pub content: Option<String>,
}

/// Response body for `POST /api/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message: String,
}
