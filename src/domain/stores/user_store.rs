//! Store trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for accounts, consumed by the auth service.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUserStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered
    /// and [`AppError::Store`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an account by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
