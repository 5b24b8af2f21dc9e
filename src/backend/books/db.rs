//! Database operations for item browsing
//!
//! Every item query aggregates its photos into one `photos` array so a
//! multi-photo item still maps to a single `ItemSummary`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// An item with its seller's username and all photo URLs
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ItemSummary {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Owner's username
    pub seller: String,
    pub title: String,
    pub description: String,
    /// Price in cents
    pub price: i64,
    pub sold_status: bool,
    pub created_at: DateTime<Utc>,
    /// Photo URLs in insertion order
    pub photos: Vec<String>,
}

/// Normalized search parameters for `GET /books`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSearch {
    /// ILIKE pattern, already escaped and wrapped in `%`
    pub title_pattern: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub limit: i64,
    pub offset: i64,
}

/// Escape LIKE metacharacters so user text only ever matches literally
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Unsold items matching the search, newest first
pub async fn search_items(
    pool: &PgPool,
    search: &BookSearch,
) -> Result<Vec<ItemSummary>, sqlx::Error> {
    sqlx::query_as::<_, ItemSummary>(
        r#"
        SELECT i.id, i.owner_id, u.username AS seller, i.title, i.description,
               i.price, i.sold_status, i.created_at,
               COALESCE(ARRAY_AGG(p.photo_url ORDER BY p.id)
                        FILTER (WHERE p.photo_url IS NOT NULL), ARRAY[]::TEXT[]) AS photos
        FROM items i
        JOIN users u ON u.id = i.owner_id
        LEFT JOIN photo_urls p ON p.item_id = i.id
        WHERE i.sold_status = FALSE
          AND ($1::TEXT IS NULL OR i.title ILIKE $1)
          AND ($2::BIGINT IS NULL OR i.price >= $2)
          AND ($3::BIGINT IS NULL OR i.price <= $3)
        GROUP BY i.id, u.username
        ORDER BY i.created_at DESC, i.id
        LIMIT $4 OFFSET $5
        "#
    )
    .bind(search.title_pattern.as_deref())
    .bind(search.min_price)
    .bind(search.max_price)
    .bind(search.limit)
    .bind(search.offset)
    .fetch_all(pool)
    .await
}

/// Get one item, sold or not
pub async fn get_item(
    pool: &PgPool,
    item_id: Uuid,
) -> Result<Option<ItemSummary>, sqlx::Error> {
    sqlx::query_as::<_, ItemSummary>(
        r#"
        SELECT i.id, i.owner_id, u.username AS seller, i.title, i.description,
               i.price, i.sold_status, i.created_at,
               COALESCE(ARRAY_AGG(p.photo_url ORDER BY p.id)
                        FILTER (WHERE p.photo_url IS NOT NULL), ARRAY[]::TEXT[]) AS photos
        FROM items i
        JOIN users u ON u.id = i.owner_id
        LEFT JOIN photo_urls p ON p.item_id = i.id
        WHERE i.id = $1
        GROUP BY i.id, u.username
        "#
    )
    .bind(item_id)
    .fetch_optional(pool)
    .await
}

/// Owner of an item, `None` if the item does not exist
pub async fn item_owner(
    pool: &PgPool,
    item_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT owner_id FROM items WHERE id = $1")
        .bind(item_id)
        .fetch_optional(pool)
        .await
}
