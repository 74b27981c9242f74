//! Conversation Data Structures
//!
//! A conversation is the derived, deduplicated aggregate for one unordered
//! pair of participants. The pair is stored canonically sorted so a single
//! row exists per pair regardless of which side sent first. The aggregate
//! carries a denormalized snapshot of the last message for cheap list
//! rendering, and optionally a snapshot of one participant's directory
//! identity captured at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::actor::ActorIdentity;

/// Compute the canonical pair key for two participant identifiers
///
/// The two identifiers are sorted lexicographically as strings, so the pair
/// is direction-independent: `canonical_pair(a, b) == canonical_pair(b, a)`.
///
/// # Returns
///
/// `(low, high)` with `low <= high`.
pub fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Denormalized snapshot of the most recent message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastMessage {
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Directory identity snapshot stored inside a conversation document
///
/// Captured best-effort when the conversation is created so the counterpart
/// can be displayed without a directory join. Historic documents carry two
/// older field spellings (`location`/`departement`), tolerated on read;
/// new writes use the camelCase names only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeerSnapshot {
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(rename = "locationId", alias = "location", default)]
    pub location_id: String,
    #[serde(rename = "departementId", alias = "departement", default)]
    pub department_id: String,
}

impl From<&ActorIdentity> for PeerSnapshot {
    fn from(identity: &ActorIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
            location_id: identity.location_id.clone(),
            department_id: identity.department_id.clone(),
        }
    }
}

/// The stored conversation aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: Uuid,
    /// Lexicographically smaller participant identifier
    pub participant_low: String,
    /// Lexicographically larger participant identifier
    pub participant_high: String,
    /// Snapshot of the most recent message
    pub last_message: LastMessage,
    /// Identity snapshot captured at creation, if resolution succeeded
    pub peer_snapshot: Option<PeerSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Check whether an identifier is one of the two participants
    pub fn has_participant(&self, identifier: &str) -> bool {
        self.participant_low == identifier || self.participant_high == identifier
    }

    /// The other element of the participant pair
    ///
    /// Returns `None` for a self-pair (both elements equal) or when the
    /// given identifier is not a participant at all. Callers render these
    /// as an empty counterpart rather than an error.
    pub fn counterpart_of(&self, identifier: &str) -> Option<&str> {
        if self.participant_low == self.participant_high {
            return None;
        }
        if self.participant_low == identifier {
            Some(&self.participant_high)
        } else if self.participant_high == identifier {
            Some(&self.participant_low)
        } else {
            None
        }
    }
}

/// Resolved counterpart identity inside a conversation view
///
/// All fields degrade to empty strings when directory resolution fails;
/// a missing counterpart is never surfaced as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartView {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub location_id: String,
    pub department_id: String,
}

impl From<&ActorIdentity> for CounterpartView {
    fn from(identity: &ActorIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
            location_id: identity.location_id.clone(),
            department_id: identity.department_id.clone(),
        }
    }
}

/// One entry of the `GET /api/conversations` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub counterpart: CounterpartView,
    pub last_message: String,
    /// RFC3339 timestamp of the last message
    pub last_message_at: String,
}
