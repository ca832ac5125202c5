//! Store trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for shortened links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new link with a zeroed counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists and
    /// [`AppError::Store`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `total_clicks` by one and stamps
    /// `last_visited_at`, returning the updated link.
    ///
    /// The increment is a single read-modify-write at the store boundary,
    /// so concurrent visits to the same slug never lose updates.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no link matches the slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn record_visit(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links belonging to the given owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Deletes a link only if it belongs to `owner_id`, returning the
    /// deleted link.
    ///
    /// `Ok(None)` covers both an unknown slug and somebody else's link, so
    /// non-owners can never learn whether a slug exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_slug_for_owner(
        &self,
        slug: &str,
        owner_id: i64,
    ) -> Result<Option<Link>, AppError>;

    /// Counts all links in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
