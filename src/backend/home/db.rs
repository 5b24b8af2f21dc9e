//! Home page query

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::views::home::HomeItem;
use crate::shared::time_ago;

/// One candidate row for the featured slots
///
/// An item with several photos yields one row per photo.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeaturedRow {
    pub item_id: Uuid,
    pub item_title: String,
    pub item_price: i64,
    pub seller: String,
    pub post_date: DateTime<Utc>,
    pub item_photo: String,
}

impl FeaturedRow {
    /// Prepare the row for display, rendering the post date relative to `now`
    pub fn into_home_item(self, now: DateTime<Utc>) -> HomeItem {
        HomeItem {
            id: self.item_id,
            title: self.item_title,
            price: self.item_price,
            seller: self.seller,
            post_date: time_ago(self.post_date, now),
            photo_url: self.item_photo,
        }
    }
}

/// Unsold items of super sellers, one row per photo
pub async fn featured_candidates(pool: &PgPool) -> Result<Vec<FeaturedRow>, sqlx::Error> {
    sqlx::query_as::<_, FeaturedRow>(
        r#"
        SELECT items.id AS item_id, items.title AS item_title, items.price AS item_price,
               users.username AS seller, items.created_at AS post_date,
               photo_urls.photo_url AS item_photo
        FROM items
        JOIN users ON users.id = items.owner_id
        JOIN photo_urls ON photo_urls.item_id = items.id
        WHERE users.super_seller = TRUE
          AND items.sold_status = FALSE
        "#
    )
    .fetch_all(pool)
    .await
}
