//! Backend Module
//!
//! This module contains all server-side code for the StaffLink backend.
//! It provides an Axum HTTP server over a SQLite message store with a
//! derived conversation index and cross-collection identity resolution.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`directory`** - actor identity resolution across the employee,
//!   admin and superadmin collections
//! - **`messaging`** - message store, conversation index and the
//!   conversation-list reconstruction, plus their HTTP handlers
//! - **`error`** - backend error types and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── directory/      - Actor identity resolution
//! ├── messaging/      - Messages, conversations, handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! All shared state lives in `AppState`: the SQLite pool and the actor
//! directory constructed over it at startup. Handlers receive the state
//! through Axum's `State` extractor; there is no global mutable state.
//!
//! # Concurrency
//!
//! Requests are handled independently. The only cross-request invariant —
//! at most one conversation per participant pair — is upheld by a
//! storage-level uniqueness constraint and an atomic upsert in the write
//! path, not by in-process locking.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Actor identity resolution
pub mod directory;

/// Messaging core and handlers
pub mod messaging;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use directory::ActorDirectory;
pub use error::BackendError;
pub use server::{create_app, AppState};
