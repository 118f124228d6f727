//! API error handling
//!
//! Two response shapes only. Missing inputs get a 422 with a field-keyed
//! error map; everything else collapses to an opaque 500 so clients cannot
//! distinguish upstream failures from server faults. Details are logged
//! server-side before the collapse.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field was missing or empty
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The offending request field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Any server-side failure; the response body never carries details
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": { (field): message } })),
            )
                .into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An error occurred" })),
                )
                    .into_response()
            },
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation { field, message } => Self::Validation { field, message },
            other => Self::Internal(other.to_string()),
        }
    }
}
