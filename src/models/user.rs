use time::OffsetDateTime;
use uuid::Uuid;

/// A registered account row.
///
/// `username` is the login identifier and is set to the email address at
/// signup; both columns carry unique constraints. The password is stored only
/// as an argon2 PHC hash string.
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}
