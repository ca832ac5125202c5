//! HTTP request handlers.
//!
//! Handlers translate between the wire contract and the services; business
//! rules live one layer down.

pub mod auth;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use auth::{login_handler, signup_handler};
pub use health::health_handler;
pub use links::{delete_handler, link_count_handler, my_urls_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
