//! Backend Error Types
//!
//! This module defines the error enum used by HTTP handlers and the
//! persistence helpers underneath them. Each variant maps to exactly one
//! HTTP status code; the mapping lives in `status_code()` and the
//! user-visible text in `message()` so the `IntoResponse` impl stays a
//! one-liner.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use stafflink::backend::error::BackendError;
///
/// let err = BackendError::validation("senderId", "must not be empty");
/// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required field is missing or empty
    ///
    /// Validation failures are surfaced immediately as 400 and never
    /// reach storage.
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The persistence layer is unreachable or rejected the operation
    ///
    /// The underlying error is logged server-side; the HTTP response
    /// carries only a generic message.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// The persistence layer was never configured (no `DATABASE_URL`)
    #[error("Storage is not configured")]
    StorageUnavailable,

    /// Serialization error while assembling a response or snapshot
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::StorageUnavailable | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the user-visible error message
    ///
    /// Storage errors are reduced to a generic message here; the detailed
    /// cause is logged when the response is built, never sent to clients.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Storage(_) | Self::StorageUnavailable => "Internal storage error".to_string(),
            Self::Serialization(_) => "Internal serialization error".to_string(),
        }
    }
}
