//! Conversations Module
//!
//! Buyer/seller messaging about an item, mounted at `/conversations`.
//! A buyer has at most one conversation per item; the seller is always the
//! item's owner.

pub mod db;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

/// Routes mounted under `/conversations`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_conversations).post(handlers::open_conversation),
        )
        .route("/{id}", get(handlers::show_conversation))
        .route("/{id}/messages", post(handlers::send_message))
        .with_state(state)
}
