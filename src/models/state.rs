use sqlx::PgPool;

use crate::services::jwt::JwtService;

/// State shared by every request: the connection pool and the token service.
///
/// Holds no per-request or per-user data. The current user travels through
/// request extensions, never through shared state, and there are no
/// in-process caches.
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
}

impl AppState {
    pub fn new(db_pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            db_pool,
            jwt_service,
        }
    }
}
