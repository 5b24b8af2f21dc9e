//! Authentication Module
//!
//! User accounts, password login and cookie sessions, mounted at `/auth`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and router
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Signed session cookies
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → session cookie set
//! 2. **Login**: username and password → bcrypt verified → session cookie set
//! 3. **Logout**: session cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions are signed tokens in an `HttpOnly` cookie, nothing server side
//! - Sessions expire after 24 hours
//! - Invalid credentials return 401 (no information leakage)

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

/// User data model and database operations
pub mod users;

/// Signed session cookies
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use sessions::{SessionKeys, SessionUser};
pub use users::User;

/// Routes mounted under `/auth`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", get(handlers::login_form).post(handlers::login))
        .route("/register", get(handlers::register_form).post(handlers::register))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}
