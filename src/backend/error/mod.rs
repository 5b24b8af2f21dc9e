//! Backend Error Module
//!
//! This module defines the error type used by every HTTP handler and its
//! conversion into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and status classification
//! └── conversion.rs - IntoResponse (JSON error envelope)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bookswap::backend::error::BackendError;
//! use axum::response::Html;
//!
//! async fn handler() -> Result<Html<String>, BackendError> {
//!     Err(BackendError::not_found("Item"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
