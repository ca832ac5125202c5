//! Handler for per-link click statistics.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click report for an owned link.
///
/// # Endpoint
///
/// `GET /stats/{slug}` (identity required)
///
/// # Errors
///
/// Returns 404 if the slug is unknown or the link is anonymous, and 401 if
/// the requester is not the owner.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<StatsResponse>, AppError> {
    let report = state
        .stats_service
        .stats_for_slug(&slug, Some(&identity))
        .await?;

    Ok(Json(report.into()))
}
