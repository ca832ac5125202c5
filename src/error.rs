//! Application error taxonomy and HTTP mapping.
//!
//! Every failure the service can surface belongs to one of five variants.
//! Handlers and services return [`AppError`] and the `IntoResponse` impl
//! renders the uniform `{"error": {code, message, details}}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Closed set of application failures.
///
/// - `Validation` - missing or malformed input (400)
/// - `NotFound` - unknown slug, or a resource hidden from the requester (404)
/// - `Unauthorized` - identity absent or not the resource owner (401)
/// - `Conflict` - uniqueness violation, e.g. slug or email collision (409)
/// - `Store` - underlying persistence failure (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Store { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    /// Splits the error into its HTTP status and wire payload.
    pub fn to_parts(self) -> (StatusCode, ErrorInfo) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Store { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorInfo {
                code,
                message,
                details,
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_parts();
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::store("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid request",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::bad_request("bad", json!({})),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                AppError::not_found("missing", json!({})),
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                AppError::unauthorized("nope", json!({})),
                StatusCode::UNAUTHORIZED,
                "unauthorized",
            ),
            (
                AppError::conflict("taken", json!({})),
                StatusCode::CONFLICT,
                "conflict",
            ),
            (
                AppError::store("down", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
            ),
        ];

        for (err, status, code) in cases {
            let (got_status, info) = err.to_parts();
            assert_eq!(got_status, status);
            assert_eq!(info.code, code);
        }
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::not_found("Url not found or expired", json!({}));
        assert_eq!(err.to_string(), "Url not found or expired");
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_store() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Store { .. }));
    }
}
