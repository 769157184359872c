//! Database handle and embedded migrations
//!
//! The pool is constructed once at startup and injected into the
//! repositories; nothing in the application reaches for process-wide
//! connection state.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Executor, Pool, Sqlite, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Migrations shipped inside the binary, applied in order at startup
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial_schema",
    include_str!("../../migrations/001_initial_schema.sql"),
)];

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // Create database if it doesn't exist (for SQLite)
        if !Sqlite::database_exists(&config.url).await.unwrap_or(false) {
            Sqlite::create_database(&config.url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.unwrap_or(10))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        self.run_embedded_migrations().await?;
        Ok(())
    }

    async fn run_embedded_migrations(&self) -> Result<()> {
        // Create migrations ledger if it doesn't exist
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                success BOOLEAN NOT NULL,
                execution_time BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for (name, content) in MIGRATIONS {
            // Extract version from name (e.g., "001_initial_schema" -> 1)
            let version: i64 = name
                .split('_')
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| anyhow::anyhow!("Migration {} has no numeric version", name))?;

            let existing = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM _migrations WHERE version = ? AND success = true",
            )
            .bind(version)
            .fetch_one(&self.pool)
            .await?;

            if existing > 0 {
                continue; // Migration already applied
            }

            let start = std::time::Instant::now();
            let mut transaction = self.pool.begin().await?;

            match (&mut *transaction).execute(*content).await {
                Ok(_) => {
                    let execution_time = start.elapsed().as_millis() as i64;

                    sqlx::query(
                        r#"
                        INSERT INTO _migrations (version, description, success, execution_time)
                        VALUES (?, ?, true, ?)
                        "#,
                    )
                    .bind(version)
                    .bind(name)
                    .bind(execution_time)
                    .execute(&mut *transaction)
                    .await?;

                    transaction.commit().await?;
                    info!("Applied migration: {} ({}ms)", name, execution_time);
                }
                Err(e) => {
                    transaction.rollback().await?;
                    return Err(anyhow::anyhow!("Migration {} failed: {}", name, e));
                }
            }
        }

        Ok(())
    }
}
