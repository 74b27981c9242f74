//! Error Conversion
//!
//! This module provides the `IntoResponse` implementation that turns a
//! `BackendError` into an HTTP response.
//!
//! # Response Format
//!
//! Every error response is a JSON object with a single `message` field:
//!
//! ```json
//! {"message": "Validation error in field 'content': must not be empty"}
//! ```
//!
//! The request-handling boundary never lets an error escape as an unhandled
//! fault: handlers return `Result<_, BackendError>` and Axum funnels every
//! failure through this conversion.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Storage/serialization details stay in the server log only.
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}
