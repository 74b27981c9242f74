//! Messaging Module
//!
//! This module implements the messaging core: the immutable message store,
//! the derived conversation index maintained alongside every append, and
//! the reconstruction of a participant's conversation list.

pub mod conversations;
pub mod db;
pub mod handlers;

pub use conversations::conversations_for;
pub use handlers::*;
