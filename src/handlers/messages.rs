//! GET/POST /messages: message history and sending
//!
//! Both operations resolve the chat between the caller and the counterpart
//! first, creating it on first contact.
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::models::{MessageView, PeerInfo};
use crate::services::{ChatService, MessageService};

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessagesQuery {
    #[serde(default = "super::default_identity")]
    pub user_id: i32,
    pub other_user_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessagesResponse {
    pub messages: Vec<MessageView>,
    pub chat_id: i32,
    pub user_info: Option<PeerInfo>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "super::default_identity")]
    pub sender_id: i32,
    pub other_user_id: Option<i32>,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub chat_id: i32,
}

// ============================================
// Handlers
// ============================================

/// Message history between the viewer and the counterpart.
#[utoipa::path(
    get,
    path = "/messages",
    params(MessagesQuery),
    responses(
        (status = 200, description = "History from the viewer's perspective", body = MessagesResponse),
        (status = 400, description = "other_user_id missing")
    )
)]
pub async fn get_messages(
    pool: web::Data<PgPool>,
    query: web::Query<MessagesQuery>,
) -> Result<HttpResponse, AppError> {
    let other_user_id = query
        .other_user_id
        .ok_or_else(|| AppError::BadRequest("other_user_id required".into()))?;

    let chat_id = ChatService::find_or_create(pool.get_ref(), query.user_id, other_user_id).await?;
    let messages = MessageService::list(pool.get_ref(), chat_id, query.user_id).await?;
    let user_info = MessageService::peer_info(pool.get_ref(), other_user_id).await?;

    Ok(HttpResponse::Ok().json(MessagesResponse {
        messages,
        chat_id,
        user_info,
    }))
}

/// Send a message, resolving the chat on first contact.
#[utoipa::path(
    post,
    path = "/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Created message echoed to the sender", body = SendMessageResponse),
        (status = 400, description = "Empty message or missing counterpart")
    )
)]
pub async fn send_message(
    pool: web::Data<PgPool>,
    body: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    if req.text.is_empty() && req.file_url.as_deref().unwrap_or("").is_empty() {
        return Err(AppError::BadRequest("text or file_url required".into()));
    }
    let other_user_id = req
        .other_user_id
        .ok_or_else(|| AppError::BadRequest("other_user_id required".into()))?;

    let chat_id = ChatService::find_or_create(pool.get_ref(), req.sender_id, other_user_id).await?;
    let (id, timestamp) = MessageService::append(
        pool.get_ref(),
        chat_id,
        req.sender_id,
        &req.text,
        req.file_url.as_deref(),
        req.file_type.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(SendMessageResponse {
        id: id.to_string(),
        text: req.text,
        sender: "me".to_string(),
        timestamp,
        file_url: req.file_url,
        file_type: req.file_type,
        chat_id,
    }))
}
