//! Middleware Module
//!
//! Request-processing pieces that run before handlers: the session
//! extractors that turn the signed `session` cookie into a user, and the
//! `Api*` wrappers that report malformed input as JSON errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use bookswap::backend::middleware::AuthUser;
//!
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     format!("Hello {}", user.name)
//! }
//! ```

pub mod extract;
pub mod session;

pub use extract::{ApiForm, ApiJson, ApiPath, ApiQuery};
pub use session::{AuthUser, MaybeUser};
