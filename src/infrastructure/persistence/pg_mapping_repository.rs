//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct MappingRow {
    alias: String,
    original_url: String,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.alias, row.original_url, row.expires_at, row.created_at)
    }
}

/// PostgreSQL repository for alias mappings.
///
/// The `alias` column is the primary key; duplicate saves are absorbed by
/// `ON CONFLICT DO NOTHING`, which keeps the first record.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn get(&self, alias: &str) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT alias, original_url, expires_at, created_at
            FROM url_mappings
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlMapping::from).ok_or(AppError::NotFound)
    }

    async fn save(&self, new_mapping: NewUrlMapping) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO url_mappings (alias, original_url, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (alias) DO NOTHING
            "#,
        )
        .bind(&new_mapping.alias)
        .bind(&new_mapping.original_url)
        .bind(new_mapping.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(alias = %new_mapping.alias, "Mapping already stored, keeping first record");
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
