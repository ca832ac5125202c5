//! Handler for the slug redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::ExtractVisitMeta;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Responds 302 Found with the target in `Location`. Visit tracking for
/// owned links happens inside the service and is best-effort relative to
/// the redirect itself.
///
/// # Errors
///
/// Returns 404 if the slug is unknown.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    ExtractVisitMeta(meta): ExtractVisitMeta,
) -> Result<impl IntoResponse, AppError> {
    let target = state.redirect_service.visit(&slug, meta).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
