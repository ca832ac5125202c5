//! DTOs for signup and login.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create an account.
///
/// Fields default to empty so missing and empty values fail the same
/// validation rule.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "All fields are required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

/// The created account, stripped of anything sensitive.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub name: String,
    pub email: String,
}

/// Request to log in.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email or Password is missing."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email or Password is missing."))]
    pub password: String,
}

/// A signed, time-limited identity token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
