/**
 * Backend Error Types
 *
 * This module defines the error type returned by every route handler.
 * Each variant maps to one HTTP status and one client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `NotFound` - The requested item, conversation or user does not exist
 * - `Unauthorized` - No valid session cookie
 * - `Forbidden` - Valid session, but not the owner / participant
 * - `Conflict` - Duplicate username, email, etc.
 * - `SharedError` - Form validation failures from the `shared` helpers
 *
 * ## Server Errors
 *
 * - `Database` - Anything raised by sqlx. Classified by the database error
 *   kind: unique violations become 409, foreign-key / check / not-null
 *   violations become 400, missing rows become 404, the rest are 500.
 * - `Internal` - Password hashing, cookie signing and similar failures
 *
 * # Sanitizing
 *
 * `message()` is what the client sees. For server errors it is a fixed
 * string; the underlying detail is only available through `Display` /
 * `Debug` and is logged by the response conversion.
 */

use axum::http::StatusCode;
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned to the client for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use bookswap::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Item");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Requested resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Kind of resource, e.g. "Item"
        resource: String,
    },

    /// Missing or invalid session
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Session is valid but the user may not touch this resource
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// The request collides with existing data
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Validation error from the shared helpers
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Non-database server failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs, never sent to the client
        message: String,
    },
}

impl BackendError {
    /// Create a not-found error for a resource kind
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a validation error for a form field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create an internal error; `message` is logged, not returned
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `Conflict` - 409
    /// - `SharedError` - 400
    /// - `Database` - by database error kind (see module docs)
    /// - `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(err) => database_status(err),
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server errors always return [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { .. } => self.to_string(),
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(err) => err.user_message().to_string(),
            Self::Database(err) => match database_status(err) {
                StatusCode::CONFLICT => "Resource already exists".to_string(),
                StatusCode::BAD_REQUEST => "Request violates a data constraint".to_string(),
                StatusCode::NOT_FOUND => "Resource not found".to_string(),
                _ => INTERNAL_ERROR_MESSAGE.to_string(),
            },
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether this error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// Classify a sqlx error into client (4xx) and server (5xx) failures
fn database_status(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => StatusCode::CONFLICT,
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
