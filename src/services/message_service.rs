use sqlx::{Pool, Postgres, Row};

use crate::error::AppError;
use crate::models::{MessageView, PeerInfo};

/// How many messages a history fetch returns. The window is the FIRST 100
/// rows in ascending creation order, so rows past the cap never surface
/// through this query.
const HISTORY_LIMIT: i64 = 100;

pub struct MessageService;

impl MessageService {
    /// Insert one message and return its id together with the creation time
    /// formatted as `HH:MM`.
    ///
    /// The sender's counters are refreshed in a second statement outside any
    /// transaction; a failure between the two leaves the message committed
    /// and the counters stale.
    pub async fn append(
        db: &Pool<Postgres>,
        chat_id: i32,
        sender_id: i32,
        text: &str,
        file_url: Option<&str>,
        file_type: Option<&str>,
    ) -> Result<(i32, String), AppError> {
        let row = sqlx::query(
            "INSERT INTO messages (chat_id, sender_id, text, file_url, file_type) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, to_char(created_at, 'HH24:MI') AS time",
        )
        .bind(chat_id)
        .bind(sender_id)
        .bind(text)
        .bind(file_url)
        .bind(file_type)
        .fetch_one(db)
        .await?;

        let id: i32 = row.get("id");
        let timestamp: String = row.get("time");

        sqlx::query(
            "UPDATE users \
             SET messages_count = messages_count + 1, last_active = NOW() \
             WHERE id = $1",
        )
        .bind(sender_id)
        .execute(db)
        .await?;

        Ok((id, timestamp))
    }

    /// Message history for a chat from the viewer's perspective, ascending
    /// by creation time.
    pub async fn list(
        db: &Pool<Postgres>,
        chat_id: i32,
        viewer_id: i32,
    ) -> Result<Vec<MessageView>, AppError> {
        let rows = sqlx::query(
            "SELECT m.id, m.text, m.sender_id, m.file_url, m.file_type, \
                    to_char(m.created_at, 'HH24:MI') AS time, u.name \
             FROM messages m \
             JOIN users u ON m.sender_id = u.id \
             WHERE m.chat_id = $1 \
             ORDER BY m.created_at ASC \
             LIMIT $2",
        )
        .bind(chat_id)
        .bind(HISTORY_LIMIT)
        .fetch_all(db)
        .await?;

        let messages = rows
            .into_iter()
            .map(|row| {
                let sender_id: i32 = row.get("sender_id");
                let sender = if sender_id == viewer_id { "me" } else { "other" };
                MessageView {
                    id: row.get::<i32, _>("id").to_string(),
                    text: row.get("text"),
                    sender: sender.to_string(),
                    sender_name: row.get("name"),
                    timestamp: row.get("time"),
                    file_url: row.get("file_url"),
                    file_type: row.get("file_type"),
                }
            })
            .collect();

        Ok(messages)
    }

    /// Profile of the conversation counterpart, or None when the id is
    /// unknown.
    pub async fn peer_info(
        db: &Pool<Postgres>,
        user_id: i32,
    ) -> Result<Option<PeerInfo>, AppError> {
        let row = sqlx::query("SELECT name, avatar, status FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?;

        Ok(row.map(|r| {
            let status: String = r.get("status");
            PeerInfo {
                name: r.get("name"),
                avatar: r.get("avatar"),
                online: status == "active",
            }
        }))
    }
}
