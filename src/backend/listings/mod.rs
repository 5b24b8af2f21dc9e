//! Listings Module
//!
//! The session user's own items, mounted at `/listings`:
//!
//! - `GET /listings` - page of the user's items with the new-listing form
//! - `POST /listings` - create a listing (item and photo in one transaction)
//! - `POST /listings/{id}/sold` - mark sold
//! - `POST /listings/{id}/delete` - delete

pub mod db;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

/// Routes mounted under `/listings`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::my_listings).post(handlers::create_listing))
        .route("/{id}/sold", post(handlers::mark_listing_sold))
        .route("/{id}/delete", post(handlers::delete_listing))
        .with_state(state)
}
