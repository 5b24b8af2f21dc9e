/**
 * Router Configuration
 *
 * Combines the resource routers into a single Axum router.
 *
 * # Route Order
 *
 * Routes are resolved by path, not registration order, but the fallback only
 * sees requests that no module claimed:
 * 1. Home (`/`)
 * 2. Resource modules (`/auth`, `/books`, `/listings`, `/conversations`, `/favorites`)
 * 3. Static files from the public directory
 * 4. 404 JSON error
 */

use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::{auth, books, conversations, favorites, home, listings};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared state handed to every resource module
/// * `static_dir` - Directory served for paths no route matches
pub fn create_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Non-GET requests to unknown paths are 404s too, not ServeDir's bare 405
    let static_files = ServeDir::new(static_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .merge(home::router(app_state.clone()))
        .nest("/auth", auth::router(app_state.clone()))
        .nest("/books", books::router(app_state.clone()))
        .nest("/listings", listings::router(app_state.clone()))
        .nest("/conversations", conversations::router(app_state.clone()))
        .nest("/favorites", favorites::router(app_state))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> BackendError {
    BackendError::not_found("Page")
}
