//! Books Module
//!
//! Public item browsing, mounted at `/books`.

pub mod db;
pub mod handlers;

use axum::{routing::get, Router};

use crate::backend::server::state::AppState;

pub use db::ItemSummary;

/// Routes mounted under `/books`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_books))
        .route("/{id}", get(handlers::show_book))
        .with_state(state)
}
