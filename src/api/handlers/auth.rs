//! Handlers for signup and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an account.
///
/// # Endpoint
///
/// `POST /signup` with body `{"name", "email", "password"}`
///
/// # Errors
///
/// Returns 400 on missing fields and 409 when the email is taken.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .signup(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            name: user.name,
            email: user.email,
        }),
    ))
}

/// Verifies credentials and returns an identity token.
///
/// # Endpoint
///
/// `POST /login` with body `{"email", "password"}`
///
/// # Errors
///
/// Returns 400 on missing fields, 404 for an unknown email, and 401 for a
/// wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
