//! # Application Constants
//!
//! Business-rule limits and session lifetimes, fixed at compile time.

use std::time::Duration;

/// Maximum number of bookmarks a single user may keep.
///
/// Creating a bookmark beyond this count fails with a cap-exceeded error;
/// the user must delete one first.
pub const BOOKMARK_CAP: i64 = 5;

/// Fixed number of bookmarks returned per listing page.
pub const PAGE_SIZE: u32 = 2;

/// Lifetime of a JWT access token.
pub const ACCESS_TOKEN_EXPIRY: Duration = Duration::from_secs(15 * 60);

/// Lifetime of the refresh token backing a session; after this the user
/// must log in again.
pub const REFRESH_TOKEN_EXPIRY: Duration = Duration::from_secs(7 * 24 * 60 * 60); // 7 days
