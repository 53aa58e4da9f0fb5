//! # Profile Handler
//!
//! Read-only view of the authenticated user's own account, including how many
//! bookmarks it currently holds.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::AppState;

/// Response containing user profile information
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub member_since: OffsetDateTime,
    pub bookmark_count: i64,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    email: String,
    username: String,
    created_at: OffsetDateTime,
    bookmark_count: i64,
}

/// Gets the authenticated user's profile information.
///
/// GET /api/profile
///
/// Returns the account's email, username, registration time, and how many
/// bookmarks it currently holds. The user ID comes from the validated access
/// token, so the response always reflects the requesting account.
///
/// # Returns
///
/// - `200 OK` with [`ProfileResponse`] - Profile retrieved successfully
/// - `401 Unauthorized` - Missing or invalid authentication token
/// - `404 Not Found` - Account no longer exists
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing profile request");

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT
            email,
            username,
            created_at,
            (SELECT COUNT(*) FROM bookmarks WHERE user_id = users.id) AS bookmark_count
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user.user_id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or(AppError::NotFound("User not found"))?;

    info!("Profile retrieved successfully");
    Ok(Json(ProfileResponse {
        email: row.email,
        username: row.username,
        member_since: row.created_at,
        bookmark_count: row.bookmark_count,
    }))
}
