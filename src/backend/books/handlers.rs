//! Book browsing handlers
//!
//! - `GET /books` - JSON search over unsold items
//! - `GET /books/{id}` - HTML detail page

use axum::{
    extract::State,
    response::{Html, Json},
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::db::{self, BookSearch, ItemSummary};
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiPath, ApiQuery, MaybeUser};
use crate::backend::views::books::book_page;
use crate::shared::{time_ago, SharedError};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Query string accepted by `GET /books`
#[derive(Deserialize, Debug, Default)]
pub struct BookQuery {
    /// Case-insensitive title substring
    pub q: Option<String>,
    /// Inclusive lower bound in cents
    pub min_price: Option<i64>,
    /// Inclusive upper bound in cents
    pub max_price: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl BookQuery {
    /// Validate and normalize into search parameters
    ///
    /// A blank `q` means no title filter; `limit` above the maximum is capped.
    pub fn into_search(self) -> Result<BookSearch, SharedError> {
        if self.min_price.is_some_and(|p| p < 0) {
            return Err(SharedError::validation("min_price", "must not be negative"));
        }
        if self.max_price.is_some_and(|p| p < 0) {
            return Err(SharedError::validation("max_price", "must not be negative"));
        }

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 {
            return Err(SharedError::validation("limit", "must be at least 1"));
        }

        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(SharedError::validation("offset", "must not be negative"));
        }

        let title_pattern = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(db::like_pattern);

        Ok(BookSearch {
            title_pattern,
            min_price: self.min_price,
            max_price: self.max_price,
            limit: limit.min(MAX_LIMIT),
            offset,
        })
    }
}

/// List unsold books
pub async fn list_books(
    State(pool): State<PgPool>,
    ApiQuery(query): ApiQuery<BookQuery>,
) -> Result<Json<Vec<ItemSummary>>, BackendError> {
    let search = query.into_search()?;
    let items = db::search_items(&pool, &search).await?;
    tracing::debug!("Book search returned {} items", items.len());
    Ok(Json(items))
}

/// Show one book
pub async fn show_book(
    State(pool): State<PgPool>,
    user: MaybeUser,
    ApiPath(item_id): ApiPath<Uuid>,
) -> Result<Html<String>, BackendError> {
    let item = db::get_item(&pool, item_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Item"))?;

    let posted = time_ago(item.created_at, Utc::now());
    Ok(Html(book_page(user.name(), &item, &posted).into_string()))
}
