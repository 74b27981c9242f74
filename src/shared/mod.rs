//! Shared Module
//!
//! This module contains the types and data structures that cross the HTTP
//! boundary between the backend and the mobile client. All types here are
//! designed for serialization and transmission over HTTP.

/// Shared error types
pub mod error;

/// Messaging types (messages, conversations, actor identities)
pub mod messaging;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use messaging::{
    canonical_pair, ActorIdentity, ActorRole, Conversation, ConversationView, CounterpartView,
    LastMessage, Message, MessageView, PeerSnapshot, SendMessageRequest, SendMessageResponse,
};
