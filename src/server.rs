//! HTTP server initialization and runtime setup.
//!
//! Builds the selected store backend, applies migrations, wires the
//! services, and drives the Axum server.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::{
    MemoryClickStore, MemoryLinkStore, MemoryUserStore, PgClickStore, PgLinkStore, PgUserStore,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database connection, migrations, bind, or the
/// server runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Builds the application state over the configured store backend.
async fn build_state(config: &Config) -> Result<AppState> {
    let state = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations applied");

            let pool = Arc::new(pool);
            AppState::new(
                Arc::new(PgLinkStore::new(pool.clone())),
                Arc::new(PgClickStore::new(pool.clone())),
                Arc::new(PgUserStore::new(pool)),
                config.jwt_secret.clone(),
                config.token_ttl_seconds,
                config.bcrypt_cost,
            )
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");

            AppState::new(
                Arc::new(MemoryLinkStore::new()),
                Arc::new(MemoryClickStore::new()),
                Arc::new(MemoryUserStore::new()),
                config.jwt_secret.clone(),
                config.token_ttl_seconds,
                config.bcrypt_cost,
            )
        }
    };

    Ok(state)
}
