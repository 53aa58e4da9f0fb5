//! # Health Check Handler
//!
//! Liveness endpoint for deployment tooling and the integration test harness,
//! which polls it until the spawned server answers.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Reports that the service is up.
///
/// GET /health-check
///
/// Answers as soon as the router is serving; no database or dependency
/// checks are involved.
///
/// # Returns
///
/// Always returns `200 OK` with an empty body.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check requested");
    StatusCode::OK
}
