//! # Authentication Middleware
//!
//! Bearer-token gate in front of the protected routes. The middleware turns a
//! valid access token into an [`AuthUser`] carried in request extensions, so
//! handlers always receive the acting user explicitly instead of reading any
//! ambient session state.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::models::AppState;
use crate::services::jwt::Claims;

/// Validates the `Authorization: Bearer <token>` header on protected routes.
///
/// On success the request continues with an [`AuthUser`] inserted into its
/// extensions; every failure mode (missing header, malformed header, bad or
/// expired token, unparseable subject) collapses into a bare
/// `401 Unauthorized` with no body, so the response does not hint at which
/// check failed.
#[instrument(
    skip_all,
    fields(
        method = %req.method(),
        uri = %req.uri(),
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = bearer else {
        warn!("Missing or malformed Authorization header");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let claims = state.jwt_service.validate_access_token(token).map_err(|e| {
        warn!(error = %e, "Access token rejected");
        StatusCode::UNAUTHORIZED
    })?;

    let Ok(user_id) = Uuid::try_parse(&claims.sub) else {
        warn!("Token subject is not a valid user id");
        return Err(StatusCode::UNAUTHORIZED);
    };

    debug!(user_id = %user_id, "Request authenticated");
    req.extensions_mut().insert(AuthUser { user_id, claims });

    Ok(next.run(req).await)
}

/// The acting user, as established by [`auth_middleware`].
///
/// Handlers on protected routes extract this with `Extension<AuthUser>` and
/// must scope every data access to `user_id`.
///
/// ```rust
/// use axum::{extract::Extension, response::IntoResponse};
/// use linkshelf::middleware::AuthUser;
/// async fn protected_handler(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
///     format!("acting as {}", user.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// Decoded claims of the presented access token.
    pub claims: Claims,
}
