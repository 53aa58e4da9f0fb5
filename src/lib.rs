//! # Linkshelf - Personal Bookmark Backend
//!
//! ## Modules
//!
//! - [`error`] - Application error type and HTTP response mapping
//! - [`handlers`] - HTTP request handlers, one module per surface
//! - [`middleware`] - Bearer-token authentication for protected routes
//! - [`models`] - Database row types and shared application state
//! - [`services`] - Business logic (accounts, bookmarks, contact, JWT, passwords)
//! - [`utils`] - Constants and telemetry setup

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::env;
use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use jsonwebtoken::{DecodingKey, EncodingKey};
use sqlx::PgPool;

use crate::handlers::{
    create_bookmark, delete_bookmark, get_bookmark, get_profile, health_check, list_bookmarks,
    login, logout, refresh_token, signup, submit_contact, update_bookmark,
};
use crate::middleware::auth_middleware;
use crate::models::AppState;
use crate::services::jwt::JwtService;

/// Builds the application router over the given connection pool.
///
/// Public routes (health check, signup, login, token refresh, logout, and the
/// contact form) are merged with the bookmark and profile routes, which sit
/// behind the authentication middleware. Tests call this directly against a
/// per-test database.
///
/// # Environment Variables
///
/// - `JWT_SECRET` - Required for JWT token signing and validation
///
/// # Panics
///
/// Panics if `JWT_SECRET` is unset.
pub fn app(db_pool: PgPool) -> Router {
    let jwt_secret = env::var("JWT_SECRET").expect("Env variable `JWT_SECRET` should be set");

    let jwt_service = JwtService::new(
        EncodingKey::from_secret(jwt_secret.as_bytes()),
        DecodingKey::from_secret(jwt_secret.as_bytes()),
    );

    let state = Arc::new(AppState::new(db_pool, jwt_service));

    let protected_routes = Router::new()
        .route("/api/bookmarks", get(list_bookmarks))
        .route("/api/bookmarks", post(create_bookmark))
        .route("/api/bookmarks/{id}", get(get_bookmark))
        .route("/api/bookmarks/{id}", put(update_bookmark))
        .route("/api/bookmarks/{id}", delete(delete_bookmark))
        .route("/api/profile", get(get_profile))
        .route_layer(from_fn_with_state(Arc::clone(&state), auth_middleware));

    let public_routes = Router::new()
        .route("/health-check", get(health_check))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh_token))
        .route("/api/auth/logout", post(logout))
        .route("/api/contact", post(submit_contact));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
