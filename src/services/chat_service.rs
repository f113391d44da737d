use sqlx::{Pool, Postgres};

use crate::error::AppError;

pub struct ChatService;

impl ChatService {
    /// Resolve the chat joining two participants, creating it on first
    /// contact. The lookup checks both column orderings, so the argument
    /// order never produces a second row for the same pair.
    ///
    /// Lookup-then-insert: two simultaneous first contacts can both miss the
    /// lookup and both insert.
    pub async fn find_or_create(
        db: &Pool<Postgres>,
        user_id: i32,
        other_user_id: i32,
    ) -> Result<i32, AppError> {
        let existing: Option<i32> = sqlx::query_scalar(
            "SELECT id FROM chats \
             WHERE (user1_id = $1 AND user2_id = $2) \
                OR (user1_id = $2 AND user2_id = $1)",
        )
        .bind(user_id)
        .bind(other_user_id)
        .fetch_optional(db)
        .await?;

        if let Some(id) = existing {
            return Ok(id);
        }

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO chats (user1_id, user2_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(user_id)
        .bind(other_user_id)
        .fetch_one(db)
        .await?;

        tracing::debug!(chat_id = id, user_id, other_user_id, "created chat");

        Ok(id)
    }
}
