//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::stores::LinkStore;
use crate::error::AppError;

const LINK_COLUMNS: &str =
    "id, slug, original_url, owner_id, total_clicks, last_visited_at, created_at";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    original_url: String,
    owner_id: Option<i64>,
    total_clicks: i64,
    last_visited_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.slug,
            r.original_url,
            r.owner_id,
            r.total_clicks,
            r.last_visited_at,
            r.created_at,
        )
    }
}

/// PostgreSQL store for shortened links.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row: LinkRow = sqlx::query_as(&format!(
            "INSERT INTO links (slug, original_url, owner_id) \
             VALUES ($1, $2, $3) \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(new_link.slug)
        .bind(new_link.original_url)
        .bind(new_link.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> =
            sqlx::query_as(&format!("SELECT {LINK_COLUMNS} FROM links WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn record_visit(&self, slug: &str) -> Result<Option<Link>, AppError> {
        // Single UPDATE so concurrent visits to the same slug serialize on
        // the row instead of racing a read-then-write in application code.
        let row: Option<LinkRow> = sqlx::query_as(&format!(
            "UPDATE links \
             SET total_clicks = total_clicks + 1, last_visited_at = NOW() \
             WHERE slug = $1 \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let rows: Vec<LinkRow> = sqlx::query_as(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_slug_for_owner(
        &self,
        slug: &str,
        owner_id: i64,
    ) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(&format!(
            "DELETE FROM links WHERE slug = $1 AND owner_id = $2 RETURNING {LINK_COLUMNS}"
        ))
        .bind(slug)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
