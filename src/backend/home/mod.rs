//! Home Module
//!
//! `GET /`: featured items from super sellers.

pub mod db;
pub mod handlers;

use axum::{routing::get, Router};

use crate::backend::server::state::AppState;

/// The home route, merged at the root
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .with_state(state)
}
