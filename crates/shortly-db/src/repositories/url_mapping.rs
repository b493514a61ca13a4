//! PostgreSQL implementation of UrlRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shortly_core::{RepoResult, UrlMapping, UrlRepository};

use crate::models::UrlMappingModel;

use super::error::{map_db_error, map_insert_error};

/// PostgreSQL implementation of UrlRepository
///
/// Each operation runs in its own implicit transaction; the uniqueness
/// constraints on the urls table serialize concurrent inserts.
#[derive(Clone)]
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Create a new PgUrlRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    #[instrument(skip(self, mapping), fields(short_code = %mapping.short_code))]
    async fn insert(&self, mapping: &UrlMapping) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO urls (short_code, original_url, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&mapping.short_code)
        .bind(&mapping.normalized_url)
        .bind(mapping.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<UrlMapping>> {
        let result = sqlx::query_as::<_, UrlMappingModel>(
            r#"
            SELECT short_code, original_url, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UrlMapping::from))
    }

    #[instrument(skip(self, normalized_url))]
    async fn find_by_normalized_url(&self, normalized_url: &str) -> RepoResult<Option<UrlMapping>> {
        let result = sqlx::query_as::<_, UrlMappingModel>(
            r#"
            SELECT short_code, original_url, created_at
            FROM urls
            WHERE original_url = $1
            "#,
        )
        .bind(normalized_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UrlMapping::from))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
