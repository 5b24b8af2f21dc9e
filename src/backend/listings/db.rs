//! Database operations for a user's own listings

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::books::ItemSummary;

/// A validated new listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    /// Price in cents
    pub price: i64,
    pub photo_url: Option<String>,
}

/// All items owned by a user, sold and unsold, newest first
pub async fn list_owned_items(
    pool: &PgPool,
    owner_id: Uuid,
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
        WHERE i.owner_id = $1
        GROUP BY i.id, u.username
        ORDER BY i.created_at DESC, i.id
        "#
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Insert an item and its photo in one transaction
pub async fn create_item(
    pool: &PgPool,
    owner_id: Uuid,
    listing: &NewListing,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO items (id, owner_id, title, description, price, sold_status, created_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        "#
    )
    .bind(id)
    .bind(owner_id)
    .bind(&listing.title)
    .bind(&listing.description)
    .bind(listing.price)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    if let Some(photo_url) = &listing.photo_url {
        sqlx::query("INSERT INTO photo_urls (item_id, photo_url) VALUES ($1, $2)")
            .bind(id)
            .bind(photo_url)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(id)
}

/// Mark an item sold; returns `false` if it does not exist
pub async fn mark_sold(pool: &PgPool, item_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE items SET sold_status = TRUE WHERE id = $1")
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Delete an item (photos, favorites and conversations cascade)
pub async fn delete_item(pool: &PgPool, item_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
