//! Favorites Module
//!
//! Per-user bookmarks on items, mounted at `/favorites`.

pub mod db;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

/// Routes mounted under `/favorites`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_favorites))
        .route(
            "/{item_id}",
            post(handlers::add_favorite).delete(handlers::remove_favorite),
        )
        .with_state(state)
}
