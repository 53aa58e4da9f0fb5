//! # Bookmark Store
//!
//! Owner-scoped CRUD and listing over the `bookmarks` table. Every lookup
//! filters by `user_id` in the same predicate as the record id, so a missing
//! bookmark and another user's bookmark are indistinguishable to the caller.

use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Bookmark, BookmarkPage, PageInfo};
use crate::utils::constant::{BOOKMARK_CAP, PAGE_SIZE};

/// Creates a bookmark for `owner`, subject to the per-user cap.
///
/// The cap check and the insert are a single statement, so two concurrent
/// creates cannot push the count past [`BOOKMARK_CAP`].
///
/// # Errors
///
/// - [`AppError::CapExceeded`] - the owner already holds the maximum number of bookmarks
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool, title, url), fields(owner = %owner))]
pub async fn create(db_pool: &PgPool, owner: Uuid, title: &str, url: &str) -> AppResult<Bookmark> {
    let inserted = sqlx::query_as::<_, Bookmark>(
        r#"
        INSERT INTO bookmarks (user_id, title, url)
        SELECT $1, $2, $3
        WHERE (SELECT COUNT(*) FROM bookmarks WHERE user_id = $1) < $4
        RETURNING id, user_id, title, url, created_at
        "#,
    )
    .bind(owner)
    .bind(title)
    .bind(url)
    .bind(BOOKMARK_CAP)
    .fetch_optional(db_pool)
    .await?;

    match inserted {
        Some(bookmark) => {
            info!(bookmark_id = %bookmark.id, "Bookmark created");
            Ok(bookmark)
        }
        None => {
            warn!("Bookmark cap reached");
            Err(AppError::CapExceeded)
        }
    }
}

/// Fetches one of the owner's bookmarks.
///
/// # Errors
///
/// - [`AppError::NotFound`] - no bookmark with that id is owned by `owner`
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool), fields(owner = %owner, bookmark_id = %bookmark_id))]
pub async fn fetch(db_pool: &PgPool, owner: Uuid, bookmark_id: Uuid) -> AppResult<Bookmark> {
    sqlx::query_as::<_, Bookmark>(
        "SELECT id, user_id, title, url, created_at FROM bookmarks WHERE id = $1 AND user_id = $2",
    )
    .bind(bookmark_id)
    .bind(owner)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NotFound("Bookmark not found"))
}

/// Replaces the title and url of one of the owner's bookmarks.
///
/// `created_at` is untouched; it records when the bookmark was added, not
/// last edited.
///
/// # Errors
///
/// - [`AppError::NotFound`] - no bookmark with that id is owned by `owner`
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool, title, url), fields(owner = %owner, bookmark_id = %bookmark_id))]
pub async fn update(
    db_pool: &PgPool,
    owner: Uuid,
    bookmark_id: Uuid,
    title: &str,
    url: &str,
) -> AppResult<Bookmark> {
    let updated = sqlx::query_as::<_, Bookmark>(
        r#"
        UPDATE bookmarks
        SET title = $1, url = $2
        WHERE id = $3 AND user_id = $4
        RETURNING id, user_id, title, url, created_at
        "#,
    )
    .bind(title)
    .bind(url)
    .bind(bookmark_id)
    .bind(owner)
    .fetch_optional(db_pool)
    .await?;

    match updated {
        Some(bookmark) => {
            info!("Bookmark updated");
            Ok(bookmark)
        }
        None => Err(AppError::NotFound("Bookmark not found")),
    }
}

/// Deletes one of the owner's bookmarks.
///
/// # Errors
///
/// - [`AppError::NotFound`] - no bookmark with that id is owned by `owner`
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool), fields(owner = %owner, bookmark_id = %bookmark_id))]
pub async fn delete(db_pool: &PgPool, owner: Uuid, bookmark_id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
        .bind(bookmark_id)
        .bind(owner)
        .execute(db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Bookmark not found"));
    }

    info!("Bookmark deleted");
    Ok(())
}

/// Lists one page of the owner's bookmarks, newest first.
///
/// With a search term, a bookmark is kept when its title OR its url contains
/// the term as a case-insensitive substring. Out-of-range page numbers
/// saturate to the first or last page instead of failing.
///
/// # Errors
///
/// Returns [`AppError::Db`] if either the count or the page query fails.
#[instrument(skip(db_pool, search), fields(owner = %owner, page = requested_page))]
pub async fn list(
    db_pool: &PgPool,
    owner: Uuid,
    search: Option<&str>,
    requested_page: u32,
) -> AppResult<BookmarkPage> {
    // "%" matches every row, collapsing the no-search case into one query shape.
    let pattern = search.map_or_else(|| "%".to_string(), like_pattern);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM bookmarks WHERE user_id = $1 AND (title ILIKE $2 OR url ILIKE $2)",
    )
    .bind(owner)
    .bind(&pattern)
    .fetch_one(db_pool)
    .await?;

    let pagination = PageInfo::clamped(requested_page, total as u32, PAGE_SIZE);

    let items = sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, user_id, title, url, created_at
        FROM bookmarks
        WHERE user_id = $1 AND (title ILIKE $2 OR url ILIKE $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(owner)
    .bind(&pattern)
    .bind(i64::from(PAGE_SIZE))
    .bind(i64::from(pagination.offset(PAGE_SIZE)))
    .fetch_all(db_pool)
    .await?;

    debug!(total, page = pagination.page, "Bookmark page fetched");

    Ok(BookmarkPage { items, pagination })
}

/// Builds a `%term%` ILIKE pattern, escaping LIKE metacharacters so the term
/// is matched literally.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
