//! Shared Error Types
//!
//! This module defines error types produced by the pure helpers in `shared`
//! (price parsing, form validation). They carry enough context to be shown
//! back to the user who submitted the form.
//!
//! # Error Categories
//!
//! - `ValidationError` - A submitted field failed validation
//!
//! # Usage
//!
//! ```rust
//! use bookswap::shared::error::SharedError;
//!
//! let error = SharedError::validation("price", "Price must be a number");
//! assert_eq!(error.field(), "price");
//! ```
use thiserror::Error;

/// Shared error types returned by validation and parsing helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message suitable for showing next to the form field
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
