//! Contact message repository
//!
//! Thin CRUD over the `messages` table; listed newest-first for the staff
//! inbox.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    errors::{RepositoryError, RepositoryResult},
    models::{Message, MessageCreateRequest},
};

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: MessageCreateRequest) -> RepositoryResult<Message> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (name, email, body, read, created_at)
            VALUES (?, ?, ?, 0, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.body)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query_failed("insert_message", e.to_string()))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::record_not_found("messages", "id", id.to_string())
        })
    }

    pub async fn find_all(&self) -> RepositoryResult<Vec<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("list_messages", e.to_string()))
    }

    pub async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("find_message_by_id", e.to_string()))
    }

    pub async fn mark_read(&self, id: i64) -> RepositoryResult<Message> {
        let result = sqlx::query("UPDATE messages SET read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("mark_message_read", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found(
                "messages",
                "id",
                id.to_string(),
            ));
        }

        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::record_not_found("messages", "id", id.to_string())
        })
    }

    pub async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("delete_message", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found(
                "messages",
                "id",
                id.to_string(),
            ));
        }

        Ok(())
    }
}
