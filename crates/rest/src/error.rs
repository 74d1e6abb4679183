//! Error types for the advocate API.
//!
//! Filter and pagination input never produces an error: it is normalized to
//! defaults before a query is built. The only failures that reach a client
//! come from the storage collaborator.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | Backend (any) | 500 | exception |
//! | Validation | 400 | invalid |
//!
//! Validation errors only arise on the write path, which this API does not
//! expose; the mapping exists so the conversion is total.

use advocate_persistence::error::{BackendError, StorageError, ValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the REST layer.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request itself was unusable.
    #[error("Bad request: {message}")]
    BadRequest {
        /// What was wrong.
        message: String,
    },

    /// The storage backend cannot serve requests right now.
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Why the backend is unavailable.
        message: String,
    },

    /// Any other failure while handling the request.
    #[error("Internal error: {message}")]
    InternalError {
        /// Error details.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::BadRequest { .. } => "invalid",
            RestError::ServiceUnavailable { .. } => "transient",
            RestError::InternalError { .. } => "exception",
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = create_error_body(self.code(), &self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Builds the JSON error envelope.
fn create_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type for handlers.
pub type RestResult<T> = Result<T, RestError>;
