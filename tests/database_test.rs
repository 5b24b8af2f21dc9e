//! Database constraint handling: error classification and cascades

#[macro_use]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;
use uuid::Uuid;

use bookswap::backend::auth::users::create_user;
use bookswap::backend::conversations::db::{create_message, open_conversation};
use bookswap::backend::error::BackendError;
use bookswap::backend::favorites::db::add_favorite;
use bookswap::backend::listings::db::delete_item;
use common::*;

#[tokio::test]
#[serial]
async fn test_duplicate_user_insert_is_conflict() {
    let db = require_db!();
    create_user(db.pool(), "twice", "twice@example.com", "hash")
        .await
        .unwrap();

    let err = create_user(db.pool(), "twice", "other@example.com", "hash")
        .await
        .unwrap_err();
    let err = BackendError::from(err);

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert_eq!(err.message(), "Resource already exists");
}

#[tokio::test]
#[serial]
async fn test_photo_for_missing_item_is_bad_request() {
    let db = require_db!();

    let err = sqlx::query("INSERT INTO photo_urls (item_id, photo_url) VALUES ($1, $2)")
        .bind(Uuid::new_v4())
        .bind("/img/orphan.jpg")
        .execute(db.pool())
        .await
        .unwrap_err();
    let err = BackendError::from(err);

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Request violates a data constraint");
}

#[tokio::test]
#[serial]
async fn test_negative_price_is_bad_request() {
    let db = require_db!();
    let owner = seed_user(db.pool(), "cheapskate", false).await;

    let err = sqlx::query(
        "INSERT INTO items (id, owner_id, title, price) VALUES ($1, $2, 'Free Money', -1)",
    )
    .bind(Uuid::new_v4())
    .bind(owner.id)
    .execute(db.pool())
    .await
    .unwrap_err();

    assert_eq!(BackendError::from(err).status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_deleting_item_removes_dependent_rows() {
    let db = require_db!();
    let seller = seed_user(db.pool(), "seller", false).await;
    let buyer = seed_user(db.pool(), "buyer", false).await;
    let item = seed_item(db.pool(), &seller, "Middlemarch", 1200, false, &["/img/m.jpg"]).await;

    add_favorite(db.pool(), buyer.id, item).await.unwrap();
    let (conversation, created) = open_conversation(db.pool(), item, buyer.id, seller.id)
        .await
        .unwrap();
    assert!(created);
    create_message(db.pool(), conversation.id, buyer.id, "Is the spine intact?")
        .await
        .unwrap();

    assert!(delete_item(db.pool(), item).await.unwrap());

    for table in ["photo_urls", "favorites", "conversations", "messages"] {
        let remaining: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(remaining, 0, "{} rows left after delete", table);
    }

    // The people involved are untouched
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(users, 2);
}
