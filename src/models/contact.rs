use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// A stored contact-form submission. Rows are insert-only; there is no update
/// or delete path.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
