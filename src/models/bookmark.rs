use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// A saved bookmark row.
///
/// `created_at` is set by the database on insert and never updated; edits only
/// touch `title` and `url`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One page of a user's bookmarks plus position metadata.
#[derive(Debug, Serialize)]
pub struct BookmarkPage {
    pub items: Vec<Bookmark>,
    pub pagination: PageInfo,
}

/// Position of a page within the full result set.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Clamps `requested_page` into the valid range for `total` items and
    /// derives the adjacent-page flags.
    ///
    /// Out-of-range page numbers saturate to the first or last page instead of
    /// failing, and an empty result set still has one (empty) valid page.
    pub fn clamped(requested_page: u32, total: u32, page_size: u32) -> Self {
        let total_pages = total.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);

        Self {
            page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self, page_size: u32) -> u32 {
        (self.page - 1) * page_size
    }
}
