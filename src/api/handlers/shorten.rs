//! Handler for the shorten endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::identity::CurrentIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link.
///
/// # Endpoint
///
/// `POST /shorten` with body `{"url": "https://..."}`
///
/// Anyone may shorten; a valid bearer token makes the caller the owner,
/// which turns on visit tracking for the link. Anonymous links redirect but
/// are never tracked.
///
/// # Errors
///
/// Returns 400 if the URL is missing or empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(CurrentIdentity(identity)): Extension<CurrentIdentity>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .link_service
        .shorten(payload.url, identity.as_ref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            slug: link.slug,
        }),
    ))
}
