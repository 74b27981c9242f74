//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP
//! responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Taxonomy
//!
//! - `Validation` - missing/empty required field, mapped to 400
//! - `Storage` - the persistence layer is unreachable or rejected the
//!   operation, mapped to a generic 500 that never leaks storage internals
//!
//! Directory-resolution failures are deliberately *not* part of this
//! taxonomy: they are absorbed by the callers and degrade output fields to
//! empty strings instead of surfacing as errors.
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to
//! be returned directly from handlers. Every error path produces a JSON
//! body with a `message` field.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
