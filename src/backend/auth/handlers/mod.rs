//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Form payloads
//! ├── register.rs  - Registration form and handler
//! ├── login.rs     - Login form and handler
//! └── logout.rs    - Logout handler
//! ```
//!
//! # Handlers
//!
//! - **`register_form`** / **`register`** - GET/POST /auth/register
//! - **`login_form`** / **`login`** - GET/POST /auth/login
//! - **`logout`** - POST /auth/logout
//!
//! Successful login and registration set the `session` cookie and redirect
//! to `/`. Failures re-render the form with an error and a 4xx status.

/// Form payloads
pub mod types;

/// Registration
pub mod register;

/// Login
pub mod login;

/// Logout
pub mod logout;

pub use types::{LoginForm, RegisterForm};

pub use login::{login, login_form};
pub use logout::logout;
pub use register::{register, register_form};
