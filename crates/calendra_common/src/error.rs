// --- File: crates/calendra_common/src/error.rs ---
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;
use thiserror::Error;
use tracing::error;

use crate::response::ApiError;

/// The base error type shared by every Calendra crate.
///
/// Crates keep their own error enums and implement `From<TheirError>` for
/// `CalendraError` so handlers can return it directly.
#[derive(Error, Debug)]
pub enum CalendraError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The caller may not change the resource (e.g. a locked managed field)
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CalendraError {
    fn status_code(&self) -> u16 {
        match self {
            CalendraError::ParseError(_) => 400,
            CalendraError::ConfigError(_) => 500,
            CalendraError::ValidationError(_) => 400,
            CalendraError::DatabaseError(_) => 500,
            CalendraError::ConflictError(_) => 409,
            CalendraError::NotFoundError(_) => 404,
            CalendraError::ForbiddenError(_) => 403,
            CalendraError::InternalError(_) => 500,
        }
    }
}

impl IntoResponse for CalendraError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(ApiError::new(self.to_string()))).into_response()
    }
}

impl From<serde_json::Error> for CalendraError {
    fn from(err: serde_json::Error) -> Self {
        CalendraError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for CalendraError {
    fn from(err: std::io::Error) -> Self {
        internal_error(err)
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> CalendraError {
    CalendraError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CalendraError {
    CalendraError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> CalendraError {
    CalendraError::ConflictError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> CalendraError {
    CalendraError::ForbiddenError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> CalendraError {
    CalendraError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(not_found("missing").status_code(), 404);
        assert_eq!(conflict("taken").status_code(), 409);
        assert_eq!(forbidden("locked").status_code(), 403);
        assert_eq!(internal_error("boom").status_code(), 500);
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = not_found("Event type 7").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
