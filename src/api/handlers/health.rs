//! Liveness probe.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Reports process liveness.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
