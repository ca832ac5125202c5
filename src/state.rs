//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, RedirectService, StatsService};
use crate::domain::stores::{ClickStore, LinkStore, UserStore};

/// Service handles shared across the router.
///
/// Built once at startup from a concrete store backend; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services over the given store handles.
    pub fn new(
        links: Arc<dyn LinkStore>,
        clicks: Arc<dyn ClickStore>,
        users: Arc<dyn UserStore>,
        jwt_secret: String,
        token_ttl_seconds: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(links.clone(), clicks.clone())),
            redirect_service: Arc::new(RedirectService::new(links.clone(), clicks.clone())),
            stats_service: Arc::new(StatsService::new(links, clicks)),
            auth_service: Arc::new(AuthService::new(
                users,
                jwt_secret,
                token_ttl_seconds,
                bcrypt_cost,
            )),
        }
    }
}
