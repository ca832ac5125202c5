//! Handlers for link listing, counting, and deletion.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::links::{DeletedLinkResponse, LinkCountResponse, OwnedLinkItem};
use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the requester's links.
///
/// # Endpoint
///
/// `GET /my-urls` (identity required)
///
/// # Errors
///
/// Returns 404 when the requester owns no links.
pub async fn my_urls_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<OwnedLinkItem>>, AppError> {
    let links = state.link_service.list_for_owner(&identity).await?;

    if links.is_empty() {
        return Err(AppError::not_found("No urls found", json!({})));
    }

    Ok(Json(links.into_iter().map(Into::into).collect()))
}

/// Returns the total number of links in the store.
///
/// # Endpoint
///
/// `GET /get-number-of-all-urls`
pub async fn link_count_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkCountResponse>, AppError> {
    let total = state.link_service.total_links().await?;

    Ok(Json(LinkCountResponse { total }))
}

/// Deletes an owned link and its click rows.
///
/// # Endpoint
///
/// `DELETE /delete/{slug}` (identity required)
///
/// # Errors
///
/// Returns 404 when the slug is unknown or owned by somebody else; the two
/// cases are indistinguishable on the wire.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<DeletedLinkResponse>, AppError> {
    let link = state.link_service.delete_for_owner(&slug, &identity).await?;

    Ok(Json(DeletedLinkResponse {
        id: link.id,
        slug: link.slug,
    }))
}
