//! Router configuration.
//!
//! # Route structure
//!
//! - `POST /shorten`                 - create a link (owner optional)
//! - `GET  /{slug}`                  - redirect (public)
//! - `GET  /stats/{slug}`            - click report (identity required)
//! - `GET  /my-urls`                 - own links (identity required)
//! - `DELETE /delete/{slug}`         - delete own link (identity required)
//! - `GET  /get-number-of-all-urls`  - total link count (public)
//! - `POST /signup`, `POST /login`   - accounts (public)
//! - `GET  /health`                  - liveness (public)
//!
//! # Middleware
//!
//! Identity resolution runs on every request and never rejects; the
//! `require` layer guards the protected routes. Request tracing wraps the
//! whole router.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::api::handlers::{
    delete_handler, health_handler, link_count_handler, login_handler, my_urls_handler,
    redirect_handler, shorten_handler, signup_handler, stats_handler,
};
use crate::api::middleware::{identity, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/my-urls", get(my_urls_handler))
        .route("/stats/{slug}", get(stats_handler))
        .route("/delete/{slug}", delete(delete_handler))
        .route_layer(middleware::from_fn(identity::require));

    let public = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/get-number-of-all-urls", get(link_count_handler))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler));

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity::resolve,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
