//! Error types for the database client

use calendra_common::services::{BoxedError, DuplicateSlug};
use calendra_common::{conflict, CalendraError};
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// An insert hit the unique slug constraint
    #[error("Slug already taken: {0}")]
    DuplicateSlug(String),

    /// A stored row could not be turned back into a model
    #[error("Corrupt row: {0}")]
    DecodeError(String),
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::DecodeError(err.to_string())
    }
}

impl From<DbError> for BoxedError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateSlug(slug) => DuplicateSlug(slug).into(),
            other => BoxedError(Box::new(other)),
        }
    }
}

impl From<DbError> for CalendraError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) | DbError::UrlError(msg) => CalendraError::ConfigError(msg),
            DbError::DuplicateSlug(slug) => conflict(format!("slug '{}' is already taken", slug)),
            other => CalendraError::DatabaseError(other.to_string()),
        }
    }
}
