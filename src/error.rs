//! Service error types with HTTP status code mapping.
//!
//! [`TrackerError`] is the central error type for the service. Each variant
//! maps to an HTTP status code and the flat JSON error body every endpoint
//! shares:
//!
//! ```json
//! { "error": "Invalid or missing username" }
//! ```
//!
//! Storage failures additionally carry the driver message:
//!
//! ```json
//! { "error": "Could not add user to the database", "details": "..." }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Flat JSON error response body shared by all endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message naming the failed operation or field.
    pub error: String,
    /// Optional driver-level detail, present on storage failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant        | Category                       | HTTP Status               |
/// |----------------|--------------------------------|---------------------------|
/// | `Validation`   | Missing or malformed input     | 400 Bad Request           |
/// | `UserNotFound` | Referenced user does not exist | 404 Not Found             |
/// | `Storage`      | Persistence layer failure      | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Client input is missing or malformed. The message names the
    /// offending field.
    #[error("{0}")]
    Validation(String),

    /// An exercise referenced a user id that does not exist.
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// The persistence layer failed. `context` is the generic operation
    /// message surfaced to the client; the driver error rides along as
    /// `details`.
    #[error("{context}")]
    Storage {
        /// Generic message describing the failed store operation.
        context: String,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },
}

impl TrackerError {
    /// Shorthand for a [`TrackerError::Validation`] with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wraps a driver error with the generic context message surfaced to
    /// the client.
    #[must_use]
    pub fn storage(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            Self::Storage { source, .. } => {
                tracing::error!(error = %source, "storage failure");
                Some(source.to_string())
            }
            Self::Validation(_) | Self::UserNotFound(_) => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
