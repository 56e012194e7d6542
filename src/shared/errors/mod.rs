//! Error Types
//!
//! Registry error types with HTTP status code mapping for the REST surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Returned when text cannot be resolved to a network ID.
///
/// Carries the caller's input exactly as given, before any case folding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse network name: {input:?}")]
pub struct ParseNetworkNameError {
    input: String,
}

impl ParseNetworkNameError {
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The unmodified text that failed to parse
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Domain-level errors representing registry invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Duplicate network {field} '{value}' in registry")]
    DuplicateNetwork { field: &'static str, value: String },
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Parse(#[from] ParseNetworkNameError),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Parse(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "INVALID_NETWORK_NAME",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => (
                uc_error.status_code(),
                uc_error.error_code().to_string(),
                uc_error.to_string(),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone())
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ParseNetworkNameError> for ApiError {
    fn from(err: ParseNetworkNameError) -> Self {
        ApiError::UseCase(UseCaseError::Parse(err))
    }
}
