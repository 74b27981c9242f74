//! Messaging Types
//!
//! This module contains the data structures for the messaging system:
//!
//! - `Message` - a stored point-to-point message
//! - `Conversation` - the deduplicated per-pair conversation aggregate
//! - `ActorIdentity` - a resolved participant identity
//!
//! Request/response DTOs for the HTTP surface live next to the entity they
//! describe.

pub mod actor;
pub mod conversation;
pub mod message;

// Re-export all types
pub use actor::{ActorIdentity, ActorRole, AdminSummary};
pub use conversation::{
    canonical_pair, Conversation, ConversationView, CounterpartView, LastMessage, PeerSnapshot,
};
pub use message::{Message, MessageView, SendMessageRequest, SendMessageResponse};
