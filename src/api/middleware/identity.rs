//! Bearer-token identity middleware.
//!
//! Two layers with distinct jobs:
//!
//! - [`resolve`] runs on every request. It reads the optional
//!   `Authorization: Bearer` header, verifies the token, and attaches
//!   [`CurrentIdentity`] to the request. It never rejects; a missing or
//!   invalid token just means an anonymous request.
//! - [`require`] guards protected routes. It turns an anonymous request
//!   into 401 and re-exposes the verified [`Identity`] for handlers to
//!   extract directly.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// The identity attached to every request after [`resolve`] has run.
/// `None` means anonymous.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<Identity>);

/// Resolves the request identity from the bearer token, if any.
pub async fn resolve(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let identity = bearer_token(&req)
        .and_then(|token| state.auth_service.verify_token(token));

    req.extensions_mut().insert(CurrentIdentity(identity));

    next.run(req).await
}

/// Rejects anonymous requests with 401 and unwraps the identity for
/// downstream handlers.
pub async fn require(mut req: Request, next: Next) -> Result<Response, AppError> {
    let identity = req
        .extensions()
        .get::<CurrentIdentity>()
        .and_then(|current| current.0.clone())
        .ok_or_else(|| AppError::unauthorized("You are unauthorized", json!({})))?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
