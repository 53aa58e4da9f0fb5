//! # Business Logic Services
//!
//! The rules of the application, kept apart from HTTP concerns. Services
//! take the pool (and validated input) and return domain results or
//! [`crate::error::AppError`]; handlers stay thin.
//!
//! ## Available Services
//!
//! - **Account** (`account`) - Account creation and credential verification
//! - **Bookmarks** (`bookmarks`) - Owner-scoped bookmark CRUD, search, and paging
//! - **Contact** (`contact`) - Contact message persistence
//! - **JWT** (`jwt`) - JSON Web Token creation, validation, and management
//! - **Password** (`password`) - Argon2 password hashing and verification

pub mod account;
pub mod bookmarks;
pub mod contact;
pub mod jwt;
pub mod password;
