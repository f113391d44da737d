use sqlx::{Pool, Postgres, Row};

use crate::error::AppError;
use crate::models::ChatSummary;

pub struct DirectoryService;

impl DirectoryService {
    /// Other known identities, most recently active first, capped at 20.
    ///
    /// This is a directory of potential chat partners, not an inbox: the
    /// last-message text, timestamp and unread count are static stand-ins.
    pub async fn list_candidates(
        db: &Pool<Postgres>,
        viewer_id: i32,
    ) -> Result<Vec<ChatSummary>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, avatar, status \
             FROM users \
             WHERE id != $1 \
             ORDER BY last_active DESC \
             LIMIT 20",
        )
        .bind(viewer_id)
        .fetch_all(db)
        .await?;

        let chats = rows
            .into_iter()
            .map(|row| {
                let status: String = row.get("status");
                ChatSummary {
                    id: row.get::<i32, _>("id").to_string(),
                    name: row.get("name"),
                    avatar: row.get("avatar"),
                    online: status == "active",
                    last_message: "Start a conversation".to_string(),
                    timestamp: "Just now".to_string(),
                    unread: 0,
                }
            })
            .collect();

        Ok(chats)
    }
}
