//! Favorites HTTP Handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::db;
use crate::backend::books::{db::item_owner, ItemSummary};
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiPath, AuthUser};

/// List the user's favorites
pub async fn list_favorites(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ItemSummary>>, BackendError> {
    let items = db::list_favorites(&pool, user.user_id).await?;
    Ok(Json(items))
}

/// Favorite an item
///
/// Idempotent. 404 if the item does not exist.
pub async fn add_favorite(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(item_id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    if item_owner(&pool, item_id).await?.is_none() {
        return Err(BackendError::not_found("Item"));
    }

    db::add_favorite(&pool, user.user_id, item_id).await?;
    tracing::debug!("User {} favorited item {}", user.name, item_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Unfavorite an item
///
/// Idempotent: removing a favorite that does not exist still succeeds.
pub async fn remove_favorite(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(item_id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    let removed = db::remove_favorite(&pool, user.user_id, item_id).await?;
    if removed {
        tracing::debug!("User {} unfavorited item {}", user.name, item_id);
    }
    Ok(StatusCode::NO_CONTENT)
}
