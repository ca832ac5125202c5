//! PostgreSQL implementation of the click log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::stores::ClickStore;
use crate::error::AppError;

const CLICK_COLUMNS: &str =
    "id, link_id, slug, ip, user_agent, device, browser, os, country, referer, created_at";

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    slug: String,
    ip: String,
    user_agent: String,
    device: String,
    browser: String,
    os: String,
    country: String,
    referer: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click {
            id: r.id,
            link_id: r.link_id,
            slug: r.slug,
            ip: r.ip,
            user_agent: r.user_agent,
            device: r.device,
            browser: r.browser,
            os: r.os,
            country: r.country,
            referer: r.referer,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL store for the append-only click log.
pub struct PgClickStore {
    pool: Arc<PgPool>,
}

impl PgClickStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickStore for PgClickStore {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row: ClickRow = sqlx::query_as(&format!(
            "INSERT INTO clicks \
             (link_id, slug, ip, user_agent, device, browser, os, country, referer) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {CLICK_COLUMNS}"
        ))
        .bind(new_click.link_id)
        .bind(new_click.slug)
        .bind(new_click.ip)
        .bind(new_click.user_agent)
        .bind(new_click.device)
        .bind(new_click.browser)
        .bind(new_click.os)
        .bind(new_click.country)
        .bind(new_click.referer)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Click>, AppError> {
        let rows: Vec<ClickRow> = sqlx::query_as(&format!(
            "SELECT {CLICK_COLUMNS} FROM clicks WHERE slug = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(slug)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_link_id(&self, link_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clicks WHERE link_id = $1")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
