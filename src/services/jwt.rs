//! # JWT Session Service
//!
//! Session management built on JSON Web Tokens: short-lived stateless access
//! tokens plus database-backed refresh tokens.
//!
//! ## Security
//!
//! - Refresh tokens are stored sha256-hashed, never in the clear
//! - Refresh is rotation: the presented token is deleted and replaced
//! - Logout deletes the session row, so a revoked token cannot refresh again

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::utils::constant::{ACCESS_TOKEN_EXPIRY, REFRESH_TOKEN_EXPIRY};

/// Failure modes of the session service, mapped to HTTP at the handlers.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Session not found")]
    SessionNotFound,
}

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id, stringified
    pub sub: String,
    /// Expiry, seconds since the Unix epoch
    pub exp: u64,
    /// Issued at, seconds since the Unix epoch
    pub iat: u64,
}

/// What a successful login or refresh hands back to the client.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until `access_token` expires
    pub expires_in: u64,
}

/// Issues, validates, refreshes, and revokes session tokens.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Creates a new JWT service with the provided signing keys.
    pub fn new(encoding_key: EncodingKey, decoding_key: DecodingKey) -> Self {
        Self {
            encoding_key,
            decoding_key,
        }
    }

    /// Signs a fresh access token for the user.
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, JwtError> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + ACCESS_TOKEN_EXPIRY.as_secs(),
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Establishes a session: signs an access token and stores a new refresh
    /// token row for the user.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError`] if token encoding or the session insert fails.
    #[instrument(skip(self, db_pool))]
    pub async fn create_token_pair(
        &self,
        user_id: Uuid,
        db_pool: &PgPool,
    ) -> Result<TokenPair, JwtError> {
        trace!("Establishing session");

        let access_token = self.issue_access_token(user_id)?;

        let refresh_token = Uuid::new_v4().to_string();
        let expires_at = OffsetDateTime::now_utc() + REFRESH_TOKEN_EXPIRY;

        sqlx::query("INSERT INTO sessions (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(hash_refresh_token(&refresh_token))
            .bind(expires_at)
            .execute(db_pool)
            .await?;
        trace!("Session row stored");

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: ACCESS_TOKEN_EXPIRY.as_secs(),
        })
    }

    /// Checks an access token's signature and expiry and returns its claims.
    ///
    /// Purely cryptographic; no database lookup is involved.
    ///
    /// # Errors
    ///
    /// - [`JwtError::TokenExpired`] - the token's `exp` has passed
    /// - [`JwtError::InvalidToken`] - malformed token or wrong signature
    #[instrument(skip_all, fields(token_length = token.len()))]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        match decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(token_data) => {
                trace!(user_id = %token_data.claims.sub, "Access token accepted");
                Ok(token_data.claims)
            }
            Err(e) if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                debug!("Access token expired");
                Err(JwtError::TokenExpired)
            }
            Err(e) => {
                debug!(error = %e, "Invalid access token");
                Err(JwtError::InvalidToken)
            }
        }
    }

    /// Exchanges a live refresh token for a fresh token pair.
    ///
    /// The presented token is single-use: its session row is deleted before
    /// the replacement pair is issued (rotation).
    ///
    /// # Errors
    ///
    /// - [`JwtError::SessionNotFound`] - token unknown, expired, or revoked
    /// - [`JwtError::Database`] - database operation failed
    #[instrument(skip_all, fields(token_length = refresh_token.len()))]
    pub async fn refresh_token_pair(
        &self,
        refresh_token: &str,
        db_pool: &PgPool,
    ) -> Result<TokenPair, JwtError> {
        trace!("Rotating refresh token");

        let token_hash = hash_refresh_token(refresh_token);

        let user_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT user_id FROM sessions WHERE token_hash = $1 AND expires_at > now()",
        )
        .bind(&token_hash)
        .fetch_optional(db_pool)
        .await?;

        let Some(user_id) = user_id else {
            debug!("Refresh token not found or expired");
            return Err(JwtError::SessionNotFound);
        };

        sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(&token_hash)
            .execute(db_pool)
            .await?;
        trace!(%user_id, "Old session deleted, issuing new pair");

        self.create_token_pair(user_id, db_pool).await
    }

    /// Revokes the session behind a refresh token (logout).
    ///
    /// Revoking an unknown token is not an error; logout is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Database`] if the delete fails.
    #[instrument(skip_all, fields(token_length = refresh_token.len()))]
    pub async fn revoke_refresh_token(
        &self,
        refresh_token: &str,
        db_pool: &PgPool,
    ) -> Result<(), JwtError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(hash_refresh_token(refresh_token))
            .execute(db_pool)
            .await?;

        if result.rows_affected() > 0 {
            debug!("Session revoked");
        } else {
            debug!("No session found for revocation");
        }

        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time should not be before UNIX EPOCH")
        .as_secs()
}

fn hash_refresh_token(refresh_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(refresh_token.as_bytes());
    format!("{:x}", hasher.finalize())
}
