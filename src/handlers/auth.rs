//! # Authentication Handlers
//!
//! Account signup plus the session lifecycle around it: logging in with email
//! (or username) and password yields a JWT access/refresh token pair, the
//! refresh endpoint rotates that pair, and logout revokes the refresh token.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::AppState;
use crate::services::account;

/// Request payload for creating an account
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    pub confirm_password: String,
}

/// Response returned after a successful signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

/// Request payload for logging in with email or username
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Token pair handed to the client on login and refresh
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Request payload for refreshing or revoking JWT tokens
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Creates a new user account.
///
/// POST /api/auth/signup
///
/// The account's username starts out equal to the email address. Passwords
/// must be at least 8 characters long and both password fields must match.
///
/// # Returns
///
/// - `201 Created` with [`SignupResponse`] - Account created
/// - `400 Bad Request` - Field validation failed
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database failure
#[instrument(
    skip(state, payload),
    fields(
        email = %payload.email,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing signup request");
    payload.validate()?;

    let user = account::create_account(&state.db_pool, &payload.email, &payload.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: user.id,
            email: user.email,
            username: user.username,
        }),
    ))
}

/// Authenticates a user and issues a JWT token pair.
///
/// POST /api/auth/login
///
/// Accepts the account email or username as the identifier. Unknown
/// identifiers and wrong passwords produce the same response, so the endpoint
/// does not reveal which accounts exist.
///
/// # Returns
///
/// - `200 OK` with [`AuthResponse`] - Credentials verified, tokens issued
/// - `401 Unauthorized` - Unknown identifier or wrong password
/// - `500 Internal Server Error` - Database failure or token signing failure
#[instrument(skip(state, payload), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing login request");

    let user =
        account::authenticate(&state.db_pool, &payload.identifier, &payload.password).await?;

    let token_pair = state
        .jwt_service
        .create_token_pair(user.id, &state.db_pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create token pair");
            AppError::Internal
        })?;

    info!(user_id = %user.id, "Login successful");
    Ok(Json(AuthResponse {
        access_token: token_pair.access_token,
        refresh_token: token_pair.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: token_pair.expires_in,
    }))
}

/// Refreshes a JWT token pair using a valid refresh token.
///
/// POST /api/auth/refresh
///
/// The presented refresh token is invalidated when the new pair is issued.
///
/// # Returns
///
/// - `200 OK` with [`AuthResponse`] - New token pair issued
/// - `401 Unauthorized` - Refresh token unknown, expired, or revoked
#[instrument(skip(state, payload), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> impl IntoResponse {
    debug!("Processing token refresh request");

    match state
        .jwt_service
        .refresh_token_pair(&payload.refresh_token, &state.db_pool)
        .await
    {
        Ok(token_pair) => {
            info!("Token refresh successful");
            (
                StatusCode::OK,
                Json(AuthResponse {
                    access_token: token_pair.access_token,
                    refresh_token: token_pair.refresh_token,
                    token_type: "Bearer".to_string(),
                    expires_in: token_pair.expires_in,
                }),
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Token refresh failed");
            (StatusCode::UNAUTHORIZED, "Invalid refresh token").into_response()
        }
    }
}

/// Revokes a refresh token, ending that session.
///
/// POST /api/auth/logout
///
/// Revocation is idempotent: logging out with an unknown or already revoked
/// token still succeeds.
///
/// # Returns
///
/// - `204 No Content` - Token revoked, or was already gone
/// - `500 Internal Server Error` - Database failure
#[instrument(skip(state, payload), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing logout request");

    state
        .jwt_service
        .revoke_refresh_token(&payload.refresh_token, &state.db_pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to revoke refresh token");
            AppError::Internal
        })?;

    info!("Logout successful");
    Ok(StatusCode::NO_CONTENT)
}
