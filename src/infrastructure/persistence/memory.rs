//! In-memory store backend.
//!
//! Process-local maps behind `tokio::sync::RwLock`. Selected with
//! `STORE_BACKEND=memory`; nothing survives a restart. The integration test
//! suite runs on this backend so it exercises the real router without a
//! database.
//!
//! Every mutation happens under a single write-lock acquisition, which gives
//! the same no-lost-updates guarantee the SQL backend gets from its atomic
//! `UPDATE`.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Link, NewClick, NewLink, NewUser, User};
use crate::domain::stores::{ClickStore, LinkStore, UserStore};
use crate::error::AppError;

#[derive(Default)]
struct LinksInner {
    next_id: i64,
    // slug -> link; slugs are unique and immutable once assigned
    by_slug: HashMap<String, Link>,
}

/// In-memory link store.
#[derive(Default)]
pub struct MemoryLinkStore {
    inner: RwLock<LinksInner>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_slug.contains_key(&new_link.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "slug": new_link.slug }),
            ));
        }

        inner.next_id += 1;
        let link = Link::new(
            inner.next_id,
            new_link.slug.clone(),
            new_link.original_url,
            new_link.owner_id,
            0,
            None,
            Utc::now(),
        );

        inner.by_slug.insert(new_link.slug, link.clone());
        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_slug.get(slug).cloned())
    }

    async fn record_visit(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        let Some(link) = inner.by_slug.get_mut(slug) else {
            return Ok(None);
        };

        link.total_clicks += 1;
        link.last_visited_at = Some(Utc::now());
        Ok(Some(link.clone()))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;

        let mut links: Vec<Link> = inner
            .by_slug
            .values()
            .filter(|l| l.owner_id == Some(owner_id))
            .cloned()
            .collect();

        // newest first, matching the SQL backend
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn delete_by_slug_for_owner(
        &self,
        slug: &str,
        owner_id: i64,
    ) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        let owned = inner
            .by_slug
            .get(slug)
            .is_some_and(|l| l.owner_id == Some(owner_id));

        if !owned {
            return Ok(None);
        }

        Ok(inner.by_slug.remove(slug))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_slug.len() as i64)
    }
}

#[derive(Default)]
struct ClicksInner {
    next_id: i64,
    // append order preserved
    rows: Vec<Click>,
}

/// In-memory click log.
#[derive(Default)]
pub struct MemoryClickStore {
    inner: RwLock<ClicksInner>,
}

impl MemoryClickStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickStore for MemoryClickStore {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let click = Click {
            id: inner.next_id,
            link_id: new_click.link_id,
            slug: new_click.slug,
            ip: new_click.ip,
            user_agent: new_click.user_agent,
            device: new_click.device,
            browser: new_click.browser,
            os: new_click.os,
            country: new_click.country,
            referer: new_click.referer,
            created_at: Utc::now(),
        };

        inner.rows.push(click.clone());
        Ok(click)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Click>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .rows
            .iter()
            .filter(|c| c.slug == slug)
            .cloned()
            .collect())
    }

    async fn delete_by_link_id(&self, link_id: i64) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;

        let before = inner.rows.len();
        inner.rows.retain(|c| c.link_id != link_id);
        Ok((before - inner.rows.len()) as u64)
    }
}

#[derive(Default)]
struct UsersInner {
    next_id: i64,
    // email -> user; emails are unique
    by_email: HashMap<String, User>,
}

/// In-memory user store.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<UsersInner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_email.contains_key(&new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "email": new_user.email }),
            ));
        }

        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            name: new_user.name,
            email: new_user.email.clone(),
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };

        inner.by_email.insert(new_user.email, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_email.get(email).cloned())
    }
}
