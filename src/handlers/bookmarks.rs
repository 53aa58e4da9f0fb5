//! # Bookmark Handlers
//!
//! This module implements the endpoints for the authenticated user's bookmark
//! collection: create, list with search and paging, fetch, update, and delete.
//! All routes here sit behind the authentication middleware, and every
//! operation is scoped to the requesting user.

use std::sync::Arc;

use axum::{
    extract::{Extension, Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::AppState;
use crate::services::bookmarks;

/// Request payload for creating or replacing a bookmark
#[derive(Debug, Deserialize, Validate)]
pub struct BookmarkRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(url, length(max = 200))]
    pub url: String,
}

/// Query parameters accepted by the bookmark list endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
}

/// Creates a bookmark owned by the authenticated user.
///
/// POST /api/bookmarks
///
/// Each user can hold at most five bookmarks; creation past the cap is
/// rejected.
///
/// # Returns
///
/// - `201 Created` with the stored bookmark
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid authentication token
/// - `409 Conflict` - Bookmark cap reached
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<BookmarkRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let bookmark =
        bookmarks::create(&state.db_pool, user.user_id, &payload.title, &payload.url).await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// Lists the authenticated user's bookmarks, newest first.
///
/// GET /api/bookmarks?search=<term>&page=<n>
///
/// With `search`, only bookmarks whose title or url contains the term as a
/// case-insensitive substring are returned; an empty term is the same as no
/// term. Pages hold two bookmarks each, and page numbers outside the valid
/// range are clamped rather than rejected.
///
/// # Returns
///
/// - `200 OK` with a page of bookmarks and paging metadata
/// - `401 Unauthorized` - Missing or invalid authentication token
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    debug!(search = ?query.search, page = ?query.page, "Processing bookmark list request");

    let search = query.search.as_deref().filter(|term| !term.is_empty());
    let page =
        bookmarks::list(&state.db_pool, user.user_id, search, query.page.unwrap_or(1)).await?;

    Ok(Json(page))
}

/// Fetches a single bookmark owned by the authenticated user.
///
/// GET /api/bookmarks/{id}
///
/// # Returns
///
/// - `200 OK` with the bookmark
/// - `401 Unauthorized` - Missing or invalid authentication token
/// - `404 Not Found` - No such bookmark in this user's collection
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        bookmark_id = %bookmark_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let bookmark = bookmarks::fetch(&state.db_pool, user.user_id, bookmark_id).await?;

    Ok(Json(bookmark))
}

/// Replaces the title and url of one of the authenticated user's bookmarks.
///
/// PUT /api/bookmarks/{id}
///
/// # Returns
///
/// - `200 OK` with the updated bookmark
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid authentication token
/// - `404 Not Found` - No such bookmark in this user's collection
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        bookmark_id = %bookmark_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
    Json(payload): Json<BookmarkRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let bookmark = bookmarks::update(
        &state.db_pool,
        user.user_id,
        bookmark_id,
        &payload.title,
        &payload.url,
    )
    .await?;

    Ok(Json(bookmark))
}

/// Deletes one of the authenticated user's bookmarks.
///
/// DELETE /api/bookmarks/{id}
///
/// # Returns
///
/// - `204 No Content` - Bookmark deleted
/// - `401 Unauthorized` - Missing or invalid authentication token
/// - `404 Not Found` - No such bookmark in this user's collection
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        bookmark_id = %bookmark_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    bookmarks::delete(&state.db_pool, user.user_id, bookmark_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
