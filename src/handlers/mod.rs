//! # HTTP Request Handlers
//!
//! All HTTP request handlers, one module per surface. Handlers validate
//! input, call into the service layer, and map outcomes to responses.
//!
//! ## Available Handlers
//!
//! - **Authentication** (`auth`) - Signup, login, and JWT token management
//! - **Bookmarks** (`bookmarks`) - Bookmark CRUD, search, and paging
//! - **Contact** (`contact`) - Contact form submissions
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Profile** (`profile`) - User profile information retrieval

mod auth;
mod bookmarks;
mod contact;
mod health_check;
mod profile;

pub use auth::*;
pub use bookmarks::*;
pub use contact::*;
pub use health_check::*;
pub use profile::*;
