//! Conversation HTTP Handlers
//!
//! JSON endpoints for buyer/seller messaging. Every handler requires a
//! session; only the two participants can read or post to a conversation.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::db::{self, Conversation, ConversationSummary, Message};
use crate::backend::books::db::item_owner;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, ApiPath, AuthUser};
use crate::shared::SharedError;

pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize, Debug)]
pub struct OpenConversationRequest {
    pub item_id: Uuid,
}

#[derive(Deserialize, Debug)]
pub struct SendMessageRequest {
    pub body: String,
}

/// A conversation with its full message history
#[derive(Serialize, Debug)]
pub struct ConversationDetail {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub messages: Vec<Message>,
}

/// Trim a message body and check its length
pub fn validate_body(body: &str) -> Result<&str, SharedError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(SharedError::validation("body", "Message cannot be empty"));
    }
    if body.chars().count() > MAX_MESSAGE_CHARS {
        return Err(SharedError::validation(
            "body",
            "Message must be at most 2000 characters",
        ));
    }
    Ok(body)
}

/// List the user's conversations
pub async fn list_conversations(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ConversationSummary>>, BackendError> {
    let conversations = db::list_conversations(&pool, user.user_id).await?;
    Ok(Json(conversations))
}

/// Open (or reopen) a conversation with an item's owner
///
/// Returns 201 when a conversation was created, 200 when it already existed.
pub async fn open_conversation(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<OpenConversationRequest>,
) -> Result<(StatusCode, Json<Conversation>), BackendError> {
    let seller_id = item_owner(&pool, request.item_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Item"))?;

    if seller_id == user.user_id {
        return Err(BackendError::validation(
            "item_id",
            "You cannot start a conversation about your own item",
        ));
    }

    let (conversation, created) =
        db::open_conversation(&pool, request.item_id, user.user_id, seller_id).await?;

    if created {
        tracing::info!(
            "User {} opened conversation {} about item {}",
            user.name,
            conversation.id,
            request.item_id
        );
        Ok((StatusCode::CREATED, Json(conversation)))
    } else {
        Ok((StatusCode::OK, Json(conversation)))
    }
}

/// Show a conversation and its messages
pub async fn show_conversation(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(conversation_id): ApiPath<Uuid>,
) -> Result<Json<ConversationDetail>, BackendError> {
    let conversation = participant_conversation(&pool, conversation_id, user.user_id).await?;
    let messages = db::list_messages(&pool, conversation.id).await?;

    Ok(Json(ConversationDetail {
        conversation,
        messages,
    }))
}

/// Post a message to a conversation
pub async fn send_message(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(conversation_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), BackendError> {
    let conversation = participant_conversation(&pool, conversation_id, user.user_id).await?;
    let body = validate_body(&request.body)?;

    let message = db::create_message(&pool, conversation.id, user.user_id, body).await?;
    tracing::debug!("User {} posted message {} to {}", user.name, message.id, conversation.id);

    Ok((StatusCode::CREATED, Json(message)))
}

async fn participant_conversation(
    pool: &PgPool,
    conversation_id: Uuid,
    user_id: Uuid,
) -> Result<Conversation, BackendError> {
    let conversation = db::get_conversation(pool, conversation_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Conversation"))?;

    if !conversation.is_participant(user_id) {
        tracing::warn!("User {} is not part of conversation {}", user_id, conversation_id);
        return Err(BackendError::forbidden("Not a participant in this conversation"));
    }

    Ok(conversation)
}
