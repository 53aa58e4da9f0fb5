//! # Contact Handler
//!
//! Public endpoint accepting contact form submissions. Messages are persisted
//! for later review; nothing is emailed on submission and no account is
//! required.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::AppState;
use crate::services::contact;

/// Request payload for a contact form submission
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Response confirming a stored contact message
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Accepts a contact form submission.
///
/// POST /api/contact
///
/// The sender's name is capped at 100 characters and the email address must
/// be well formed. Valid submissions are stored immediately.
///
/// # Returns
///
/// - `201 Created` with [`ContactResponse`] - Message stored
/// - `400 Bad Request` - Field validation failed
/// - `500 Internal Server Error` - Database failure
#[instrument(
    skip(state, payload),
    fields(
        email = %payload.email,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing contact submission");
    payload.validate()?;

    let stored = contact::submit(
        &state.db_pool,
        &payload.name,
        &payload.email,
        &payload.message,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            id: stored.id,
            created_at: stored.created_at,
        }),
    ))
}
