//! PostgreSQL implementation of the hit count repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::HitCountRepository;
use crate::error::AppError;

/// PostgreSQL repository for hit counters.
///
/// Increments are a single upsert statement; PostgreSQL's row lock on the
/// conflicting key serializes concurrent increments of the same alias.
pub struct PgHitCountRepository {
    pool: Arc<PgPool>,
}

impl PgHitCountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HitCountRepository for PgHitCountRepository {
    async fn get(&self, alias: &str) -> Result<i64, AppError> {
        let hits: Option<i64> = sqlx::query_scalar("SELECT hits FROM hit_counts WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        hits.ok_or(AppError::NotFound)
    }

    async fn increment(&self, alias: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO hit_counts (alias, hits)
            VALUES ($1, 1)
            ON CONFLICT (alias)
            DO UPDATE SET hits = hit_counts.hits + 1, updated_at = NOW()
            "#,
        )
        .bind(alias)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
