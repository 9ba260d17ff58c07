/**
 * Service Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 * Every variant maps to exactly one HTTP status code and carries a
 * human-readable message. Errors are terminal for the request; nothing
 * is retried internally.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by request handlers.
///
/// - `Validation` - malformed or out-of-range input, raised before any
///   persistence access
/// - `NotFound` - a referenced entity id does not exist
/// - `Conflict` - uniqueness or duplicate-association violation
/// - `Unauthorized` - missing, invalid, or expired credentials/token
/// - `Forbidden` - authenticated but lacking the required role
/// - `Database` - an untranslated persistence failure (fatal for the request)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the response body.
    ///
    /// Internal failures are not echoed back to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
