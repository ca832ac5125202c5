//! Concrete implementations of the domain store traits.
//!
//! # Backends
//!
//! - [`PgLinkStore`] / [`PgClickStore`] / [`PgUserStore`] - PostgreSQL via
//!   SQLx; the deployment backend.
//! - [`MemoryLinkStore`] / [`MemoryClickStore`] / [`MemoryUserStore`] -
//!   process-local maps behind async locks; selected with
//!   `STORE_BACKEND=memory` and used by the integration test suite.

pub mod memory;
pub mod pg_click_store;
pub mod pg_link_store;
pub mod pg_user_store;

pub use memory::{MemoryClickStore, MemoryLinkStore, MemoryUserStore};
pub use pg_click_store::PgClickStore;
pub use pg_link_store::PgLinkStore;
pub use pg_user_store::PgUserStore;
