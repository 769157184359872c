//! Mailing-list subscriber repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    errors::{RepositoryError, RepositoryResult},
    models::Subscriber,
};

#[derive(Clone)]
pub struct SubscriberRepository {
    pool: SqlitePool,
}

impl SubscriberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, email: &str) -> RepositoryResult<Subscriber> {
        let result = sqlx::query("INSERT INTO subscribers (email, created_at) VALUES (?, ?)")
            .bind(email)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err)
                    if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
                {
                    RepositoryError::constraint_violation("subscribers.email", e.to_string())
                }
                _ => RepositoryError::query_failed("insert_subscriber", e.to_string()),
            })?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::record_not_found("subscribers", "id", id.to_string())
        })
    }

    pub async fn find_all(&self) -> RepositoryResult<Vec<Subscriber>> {
        sqlx::query_as::<_, Subscriber>("SELECT * FROM subscribers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("list_subscribers", e.to_string()))
    }

    pub async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Subscriber>> {
        sqlx::query_as::<_, Subscriber>("SELECT * FROM subscribers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("find_subscriber_by_id", e.to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Subscriber>> {
        sqlx::query_as::<_, Subscriber>("SELECT * FROM subscribers WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("find_subscriber_by_email", e.to_string()))
    }

    pub async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("delete_subscriber", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found(
                "subscribers",
                "id",
                id.to_string(),
            ));
        }

        Ok(())
    }
}
