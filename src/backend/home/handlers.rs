use axum::{extract::State, response::Html};
use chrono::Utc;
use sqlx::PgPool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::MaybeUser;
use crate::backend::views::home::{home_page, HomeItem, HomeView};
use crate::shared::{featured_slots, random_featured_items};

/// Home page
///
/// Loads every eligible row, picks up to five at random for the featured
/// slots and renders them with the session's display name. A database
/// failure becomes a 500 JSON error.
pub async fn home(
    State(pool): State<PgPool>,
    user: MaybeUser,
) -> Result<Html<String>, BackendError> {
    let rows = db::featured_candidates(&pool).await?;

    let now = Utc::now();
    let items: Vec<HomeItem> = rows.into_iter().map(|row| row.into_home_item(now)).collect();

    let picks = random_featured_items(items.len(), &mut rand::thread_rng());
    tracing::debug!("Featuring {:?} of {} candidate rows", picks, items.len());

    let view = HomeView {
        username: user.name(),
        features: featured_slots(&items, &picks),
    };

    Ok(Html(home_page(&view).into_string()))
}
