//! Link creation, listing, and deletion.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Identity, Link, NewLink};
use crate::domain::stores::{ClickStore, LinkStore};
use crate::error::AppError;
use crate::utils::slug::generate_slug;

/// How many fresh slugs to try before giving up on a create.
///
/// Collisions are negligible at this alphabet and length, so exhaustion
/// effectively never happens outside of a broken store.
const MAX_SLUG_ATTEMPTS: usize = 5;

/// Service for creating and managing shortened links.
pub struct LinkService {
    links: Arc<dyn LinkStore>,
    clicks: Arc<dyn ClickStore>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkStore>, clicks: Arc<dyn ClickStore>) -> Self {
        Self { links, clicks }
    }

    /// Creates a shortened link for `url`, owned by `owner` when present.
    ///
    /// Allocates a fresh slug per attempt and retries on collision, so a
    /// lost race against a concurrent create self-heals instead of
    /// surfacing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or empty,
    /// [`AppError::Conflict`] if no unique slug could be allocated, and
    /// [`AppError::Store`] on database errors.
    pub async fn shorten(&self, url: String, owner: Option<&Identity>) -> Result<Link, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "URL is missing from request body",
                json!({}),
            ));
        }

        let owner_id = owner.map(|i| i.user_id);

        for _ in 0..MAX_SLUG_ATTEMPTS {
            let new_link = NewLink {
                slug: generate_slug(),
                original_url: url.clone(),
                owner_id,
            };

            match self.links.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::conflict(
            "Failed to allocate a unique slug",
            json!({ "attempts": MAX_SLUG_ATTEMPTS }),
        ))
    }

    /// Lists the links owned by the requesting identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_for_owner(&self, identity: &Identity) -> Result<Vec<Link>, AppError> {
        self.links.list_by_owner(identity.user_id).await
    }

    /// Counts all links in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn total_links(&self) -> Result<i64, AppError> {
        self.links.count().await
    }

    /// Deletes a link owned by the requesting identity, cascading to its
    /// click rows.
    ///
    /// A slug that does not exist and a slug owned by somebody else are
    /// indistinguishable to the caller: both report not-found.
    ///
    /// The click cascade runs after the link delete without a shared
    /// transaction; if it fails, the rows it would have removed are
    /// unreachable dead data and the delete still counts as done.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no owned link matches and
    /// [`AppError::Store`] on database errors.
    pub async fn delete_for_owner(
        &self,
        slug: &str,
        identity: &Identity,
    ) -> Result<Link, AppError> {
        let link = self
            .links
            .delete_by_slug_for_owner(slug, identity.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Url not found", json!({ "slug": slug })))?;

        match self.clicks.delete_by_link_id(link.id).await {
            Ok(removed) => debug!(slug = %link.slug, removed, "click rows cascaded"),
            Err(e) => warn!(slug = %link.slug, error = %e, "click cascade failed"),
        }

        Ok(link)
    }
}
