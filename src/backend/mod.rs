//! Backend Module
//!
//! All server-side code: the Axum application, its resource modules and
//! their PostgreSQL queries.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly, static files, request tracing
//! - **`home`** - Featured items on `/`
//! - **`auth`** - Accounts, password login, cookie sessions (`/auth`)
//! - **`books`** - Public item browsing (`/books`)
//! - **`listings`** - The session user's own items (`/listings`)
//! - **`conversations`** - Buyer/seller messaging (`/conversations`)
//! - **`favorites`** - Per-user bookmarks (`/favorites`)
//! - **`views`** - `maud` page templates
//! - **`middleware`** - Session extractors
//! - **`error`** - `BackendError` and its HTTP conversion
//!
//! # Request Flow
//!
//! request → session cookie verified (`MaybeUser` / `AuthUser`) → routed by
//! path prefix → handler runs parameterized SQL on the shared `PgPool` →
//! rows mapped to view data → page rendered or JSON returned.
//!
//! Each resource module exposes `router(state) -> Router`; the pool is
//! carried in `AppState`, never in a global.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Session extractors
pub mod middleware;

/// Page templates
pub mod views;

/// Home page
pub mod home;

/// Authentication and user management
pub mod auth;

/// Item browsing
pub mod books;

/// The session user's listings
pub mod listings;

/// Buyer/seller conversations
pub mod conversations;

/// Favorites
pub mod favorites;

pub use error::BackendError;
pub use server::{create_app, AppState};
