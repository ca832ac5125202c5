//! Store trait for the append-only click log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for click events.
///
/// Clicks are append-only; the only deletion path is the cascade that runs
/// when the owning link is removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryClickStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickStore: Send + Sync {
    /// Appends an immutable click record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors. Callers on the visit
    /// path treat this as a partial failure: logged, never silently
    /// swallowed, but the redirect is unaffected.
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns all clicks recorded for a slug in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Click>, AppError>;

    /// Deletes every click referencing the given link, returning the number
    /// of removed rows. Used by the link-deletion cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_link_id(&self, link_id: i64) -> Result<u64, AppError>;
}
