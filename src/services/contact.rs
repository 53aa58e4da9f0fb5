//! # Contact Message Store
//!
//! Persists contact form submissions for later review. Messages are stored
//! as-is; nothing is sent anywhere on submission.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::error::AppResult;
use crate::models::ContactMessage;

/// Stores a validated contact submission and returns the stored row.
///
/// # Errors
///
/// Returns [`crate::error::AppError::Db`] if the insert fails.
#[instrument(skip_all, fields(email = %email))]
pub async fn submit(
    db_pool: &PgPool,
    name: &str,
    email: &str,
    message: &str,
) -> AppResult<ContactMessage> {
    let stored = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, message)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, message, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(message)
    .fetch_one(db_pool)
    .await?;

    info!(message_id = %stored.id, "Contact message stored");
    Ok(stored)
}
