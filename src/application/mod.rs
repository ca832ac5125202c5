//! Application layer services implementing business logic.
//!
//! Services orchestrate store operations, validation, and authorization
//! rules behind a clean API for the HTTP handlers. Store handles are
//! injected at construction; no ambient state.
//!
//! - [`services::LinkService`] - link creation, listing, deletion
//! - [`services::RedirectService`] - the visit pipeline
//! - [`services::StatsService`] - click aggregation and reporting
//! - [`services::AuthService`] - accounts and identity tokens

pub mod services;
