//! Database operations for buyer/seller conversations

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Longest last-message preview returned in conversation lists
pub const PREVIEW_CHARS: i32 = 120;

/// A conversation between a buyer and an item's owner
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub item_id: Uuid,
    pub item_title: String,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.buyer_id == user_id || self.seller_id == user_id
    }
}

/// One row of the conversation list
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ConversationSummary {
    pub id: Uuid,
    pub item_id: Uuid,
    pub item_title: String,
    /// Username of the other participant
    pub counterpart: String,
    pub last_message: Option<String>,
    /// Time of the newest message, or of creation if there are none
    pub last_activity: DateTime<Utc>,
}

/// A message with its sender's username
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub sender: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Conversations the user takes part in, most recent activity first
pub async fn list_conversations(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ConversationSummary>, sqlx::Error> {
    sqlx::query_as::<_, ConversationSummary>(
        r#"
        SELECT c.id, c.item_id, i.title AS item_title,
               CASE WHEN c.buyer_id = $1 THEN s.username ELSE b.username END AS counterpart,
               LEFT(m.body, $2) AS last_message,
               COALESCE(m.created_at, c.created_at) AS last_activity
        FROM conversations c
        JOIN items i ON i.id = c.item_id
        JOIN users b ON b.id = c.buyer_id
        JOIN users s ON s.id = c.seller_id
        LEFT JOIN LATERAL (
            SELECT body, created_at
            FROM messages
            WHERE conversation_id = c.id
            ORDER BY created_at DESC
            LIMIT 1
        ) m ON TRUE
        WHERE c.buyer_id = $1 OR c.seller_id = $1
        ORDER BY last_activity DESC
        "#
    )
    .bind(user_id)
    .bind(PREVIEW_CHARS)
    .fetch_all(pool)
    .await
}

/// Get a conversation by ID
pub async fn get_conversation(
    pool: &PgPool,
    conversation_id: Uuid,
) -> Result<Option<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT c.id, c.item_id, i.title AS item_title, c.buyer_id, c.seller_id, c.created_at
        FROM conversations c
        JOIN items i ON i.id = c.item_id
        WHERE c.id = $1
        "#
    )
    .bind(conversation_id)
    .fetch_optional(pool)
    .await
}

/// Open the buyer's conversation about an item, or return the existing one
///
/// The boolean is `true` when a new conversation was created.
pub async fn open_conversation(
    pool: &PgPool,
    item_id: Uuid,
    buyer_id: Uuid,
    seller_id: Uuid,
) -> Result<(Conversation, bool), sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO conversations (id, item_id, buyer_id, seller_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (item_id, buyer_id) DO NOTHING
        "#
    )
    .bind(Uuid::new_v4())
    .bind(item_id)
    .bind(buyer_id)
    .bind(seller_id)
    .bind(Utc::now())
    .execute(pool)
    .await?
    .rows_affected()
        == 1;

    let conversation = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT c.id, c.item_id, i.title AS item_title, c.buyer_id, c.seller_id, c.created_at
        FROM conversations c
        JOIN items i ON i.id = c.item_id
        WHERE c.item_id = $1 AND c.buyer_id = $2
        "#
    )
    .bind(item_id)
    .bind(buyer_id)
    .fetch_one(pool)
    .await?;

    Ok((conversation, inserted))
}

/// Messages of a conversation in chronological order
pub async fn list_messages(
    pool: &PgPool,
    conversation_id: Uuid,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT m.id, m.conversation_id, m.sender_id, u.username AS sender, m.body, m.created_at
        FROM messages m
        JOIN users u ON u.id = m.sender_id
        WHERE m.conversation_id = $1
        ORDER BY m.created_at ASC, m.id
        "#
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .await
}

/// Append a message
pub async fn create_message(
    pool: &PgPool,
    conversation_id: Uuid,
    sender_id: Uuid,
    body: &str,
) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        WITH inserted AS (
            INSERT INTO messages (id, conversation_id, sender_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, conversation_id, sender_id, body, created_at
        )
        SELECT inserted.id, inserted.conversation_id, inserted.sender_id,
               u.username AS sender, inserted.body, inserted.created_at
        FROM inserted
        JOIN users u ON u.id = inserted.sender_id
        "#
    )
    .bind(Uuid::new_v4())
    .bind(conversation_id)
    .bind(sender_id)
    .bind(body)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}
