//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading (database pool, migrations)
//! - **`init`** - Server initialization and app creation
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container. The storage
//! pool and the actor directory are constructed once at startup and injected
//! into handlers through the state; there are no module-level globals and no
//! per-request connections.

/// Application state
pub mod state;

/// Configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used items
pub use init::create_app;
pub use state::AppState;
