//! Show repository
//!
//! Query shaping (filtering, ordering, pagination) over the `shows` table.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    errors::{RepositoryError, RepositoryResult},
    models::{NewShow, PastQuery, Show, ShowChanges, ShowListQuery, ShowStatus, UpcomingQuery},
    repositories::traits::Repository,
};

#[derive(Clone)]
pub struct ShowRepository {
    pool: SqlitePool,
}

impl ShowRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Shows with a date in the future, published, ordered by date ascending
    pub async fn list_upcoming(&self, query: UpcomingQuery) -> RepositoryResult<Vec<Show>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM shows WHERE date >= ");
        builder.push_bind(Utc::now());
        builder.push(" AND published = 1");

        if query.featured_only {
            builder.push(" AND featured = 1");
        }
        if query.exclude_sold_out {
            builder.push(" AND status != ");
            builder.push_bind(ShowStatus::SoldOut);
        }

        builder.push(" ORDER BY date ASC");

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }

        builder
            .build_query_as::<Show>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("list_upcoming_shows", e.to_string()))
    }

    /// Featured upcoming shows, capped at `limit`
    pub async fn list_featured(&self, limit: i64) -> RepositoryResult<Vec<Show>> {
        sqlx::query_as::<_, Show>(
            r#"
            SELECT * FROM shows
            WHERE featured = 1 AND date >= ? AND published = 1
            ORDER BY date ASC
            LIMIT ?
            "#,
        )
        .bind(Utc::now())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query_failed("list_featured_shows", e.to_string()))
    }

    /// Published shows with a date in the past, newest first
    pub async fn list_past(&self, query: PastQuery) -> RepositoryResult<Vec<Show>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM shows WHERE date < ");
        builder.push_bind(Utc::now());
        builder.push(" AND published = 1 ORDER BY date DESC");

        if let Some(limit) = query.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        } else if query.offset.is_some() {
            // SQLite requires a LIMIT clause before OFFSET
            builder.push(" LIMIT -1");
        }
        if let Some(offset) = query.offset {
            builder.push(" OFFSET ");
            builder.push_bind(offset);
        }

        builder
            .build_query_as::<Show>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("list_past_shows", e.to_string()))
    }
}

#[async_trait]
impl Repository<Show, i64> for ShowRepository {
    type CreateRequest = NewShow;
    type UpdateRequest = ShowChanges;
    type Query = ShowListQuery;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Show>> {
        sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("find_show_by_id", e.to_string()))
    }

    async fn find_all(&self, query: Self::Query) -> RepositoryResult<Vec<Show>> {
        // Order column and direction come from closed enums, never from the
        // caller's raw input
        let sql = format!(
            "SELECT * FROM shows {} ORDER BY {} {}",
            if query.include_unpublished {
                ""
            } else {
                "WHERE published = 1"
            },
            query.order_by.column(),
            query.order.keyword(),
        );

        sqlx::query_as::<_, Show>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("list_shows", e.to_string()))
    }

    async fn create(&self, request: NewShow) -> RepositoryResult<Show> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO shows (
                title, date, time, end_time, description, location, venue,
                price, ticket_url, performers, featured, status, max_capacity,
                sold_tickets, image, published, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.title)
        .bind(request.date)
        .bind(request.time)
        .bind(request.end_time)
        .bind(&request.description)
        .bind(&request.location)
        .bind(&request.venue)
        .bind(request.price)
        .bind(&request.ticket_url)
        .bind(&request.performers)
        .bind(request.featured)
        .bind(request.status)
        .bind(request.max_capacity)
        .bind(request.sold_tickets)
        .bind(&request.image)
        .bind(request.published)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query_failed("insert_show", e.to_string()))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::record_not_found("shows", "id", id.to_string())
        })
    }

    async fn update(&self, id: i64, changes: ShowChanges) -> RepositoryResult<Show> {
        if changes.is_empty() {
            return self.find_by_id(id).await?.ok_or_else(|| {
                RepositoryError::record_not_found("shows", "id", id.to_string())
            });
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE shows SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(title) = changes.title {
                fields.push("title = ").push_bind_unseparated(title);
            }
            if let Some(date) = changes.date {
                fields.push("date = ").push_bind_unseparated(date);
            }
            if let Some(time) = changes.time {
                fields.push("time = ").push_bind_unseparated(time);
            }
            if let Some(end_time) = changes.end_time {
                fields.push("end_time = ").push_bind_unseparated(end_time);
            }
            if let Some(description) = changes.description {
                fields
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
            if let Some(location) = changes.location {
                fields.push("location = ").push_bind_unseparated(location);
            }
            if let Some(venue) = changes.venue {
                fields.push("venue = ").push_bind_unseparated(venue);
            }
            if let Some(price) = changes.price {
                fields.push("price = ").push_bind_unseparated(price);
            }
            if let Some(ticket_url) = changes.ticket_url {
                fields
                    .push("ticket_url = ")
                    .push_bind_unseparated(ticket_url);
            }
            if let Some(performers) = changes.performers {
                fields
                    .push("performers = ")
                    .push_bind_unseparated(performers);
            }
            if let Some(featured) = changes.featured {
                fields.push("featured = ").push_bind_unseparated(featured);
            }
            if let Some(status) = changes.status {
                fields.push("status = ").push_bind_unseparated(status);
            }
            if let Some(max_capacity) = changes.max_capacity {
                fields
                    .push("max_capacity = ")
                    .push_bind_unseparated(max_capacity);
            }
            if let Some(sold_tickets) = changes.sold_tickets {
                fields
                    .push("sold_tickets = ")
                    .push_bind_unseparated(sold_tickets);
            }
            if let Some(image) = changes.image {
                fields.push("image = ").push_bind_unseparated(image);
            }
            if let Some(published) = changes.published {
                fields.push("published = ").push_bind_unseparated(published);
            }
            fields
                .push("updated_at = ")
                .push_bind_unseparated(Utc::now());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("update_show", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found(
                "shows",
                "id",
                id.to_string(),
            ));
        }

        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::record_not_found("shows", "id", id.to_string())
        })
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM shows WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query_failed("delete_show", e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::record_not_found(
                "shows",
                "id",
                id.to_string(),
            ));
        }

        Ok(())
    }
}
