//! # Centralized Error Handling
//!
//! One error type for the whole application. Every operation failure is
//! mapped here to exactly one HTTP response, so handlers and services can
//! propagate with `?` instead of matching at each call site.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Every failure the application can surface, with its HTTP mapping.
///
/// _Db errors are logged by the response conversion; other variants are
/// logged at the point of creation when there is something worth recording._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    /// Field-level input errors, serialized per field.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("email already in use")]
    DuplicateEmail,

    #[error("bookmark limit reached")]
    CapExceeded,

    /// Missing record and not-owned record are deliberately indistinguishable.
    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Wrong identifier or wrong password; the response never says which.
    #[error("invalid credentials")]
    AuthenticationFailure,

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: ValidationErrors,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(e) = &self {
            // Full driver error stays server-side; the client sees an opaque 500
            error!(?e, "Database error occurred");
        }

        let (status, message) = match self {
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response();
            }
            AppError::DuplicateEmail => (StatusCode::CONFLICT, "This email is already in use"),
            AppError::CapExceeded => {
                (StatusCode::CONFLICT, "You can only add up to 5 bookmarks")
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::AuthenticationFailure => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result alias used by services and handlers.
pub type AppResult<T> = Result<T, AppError>;
