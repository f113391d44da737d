//! GET /chats: conversation directory for a viewer
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::models::ChatSummary;
use crate::services::DirectoryService;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListChatsQuery {
    #[serde(default = "super::default_identity")]
    pub user_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListChatsResponse {
    pub chats: Vec<ChatSummary>,
}

/// List candidate chats for the viewer, newest activity first.
#[utoipa::path(
    get,
    path = "/chats",
    params(ListChatsQuery),
    responses((status = 200, description = "Candidate chats", body = ListChatsResponse))
)]
pub async fn list_chats(
    pool: web::Data<PgPool>,
    query: web::Query<ListChatsQuery>,
) -> Result<HttpResponse, AppError> {
    let chats = DirectoryService::list_candidates(pool.get_ref(), query.user_id).await?;

    Ok(HttpResponse::Ok().json(ListChatsResponse { chats }))
}
