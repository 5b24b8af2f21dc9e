//! Database operations for favorites

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::books::ItemSummary;

/// Items the user has favorited, most recently favorited first
pub async fn list_favorites(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ItemSummary>, sqlx::Error> {
    sqlx::query_as::<_, ItemSummary>(
        r#"
        SELECT i.id, i.owner_id, u.username AS seller, i.title, i.description,
               i.price, i.sold_status, i.created_at,
               COALESCE(ARRAY_AGG(p.photo_url ORDER BY p.id)
                        FILTER (WHERE p.photo_url IS NOT NULL), ARRAY[]::TEXT[]) AS photos
        FROM favorites f
        JOIN items i ON i.id = f.item_id
        JOIN users u ON u.id = i.owner_id
        LEFT JOIN photo_urls p ON p.item_id = i.id
        WHERE f.user_id = $1
        GROUP BY i.id, u.username, f.created_at
        ORDER BY f.created_at DESC, i.id
        "#
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Favorite an item; a repeat is a no-op
pub async fn add_favorite(pool: &PgPool, user_id: Uuid, item_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO favorites (user_id, item_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, item_id) DO NOTHING
        "#
    )
    .bind(user_id)
    .bind(item_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a favorite; returns whether one existed
pub async fn remove_favorite(
    pool: &PgPool,
    user_id: Uuid,
    item_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND item_id = $2")
        .bind(user_id)
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
