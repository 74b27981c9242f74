//! StaffLink — employee messaging backend
//!
//! This crate implements the REST backend behind the StaffLink mobile
//! application: point-to-point messaging between employees and the admin
//! staff, plus the derived conversation list each participant sees.
//!
//! # Overview
//!
//! The crate is split into two top-level modules:
//!
//! - **`shared`** - serializable data structures and shared error types.
//!   These are the wire shapes the mobile client consumes.
//! - **`backend`** - the Axum HTTP server: routing, handlers, persistence,
//!   actor identity resolution and backend error types.
//!
//! The binary entry point lives at `src/backend/main.rs`.

/// Shared types and errors (wire shapes for the mobile client)
pub mod shared;

/// Axum HTTP server, handlers and persistence
pub mod backend;
