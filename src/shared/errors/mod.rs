//! Error Types
//!
//! Layered error types with HTTP status code mapping. Every failure that
//! reaches the transport layer is rendered as the portal's wire format:
//! `{"success": false, "message": "<stable text>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Identity '{id}' not found in any pool")]
    NotFound { id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable client-facing message for this error
    ///
    /// Client integrations branch on these texts; internal detail stays in
    /// the `Display` form and the logs.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "User not found",
            Self::Repository(_) => "An unexpected error occurred",
        }
    }
}

/// API error for HTTP handler responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Wire format for every failure response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    /// Build a failure body with the given message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UseCase(uc_error) => {
                if let UseCaseError::Repository(err) = uc_error {
                    tracing::error!(error = %err, "Repository failure surfaced to API");
                }
                (uc_error.status_code(), uc_error.public_message())
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred",
                )
            }
        };

        (status, Json(ErrorBody::failure(message))).into_response()
    }
}
