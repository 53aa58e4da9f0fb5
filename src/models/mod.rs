mod bookmark;
mod contact;
mod state;
mod user;

pub use bookmark::{Bookmark, BookmarkPage, PageInfo};
pub use contact::ContactMessage;
pub use state::AppState;
pub use user::User;
