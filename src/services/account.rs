//! # Account Service
//!
//! Account creation and credential checks against the `users` table. Signup
//! input validation (email syntax, password length, confirmation match) lives
//! on the request type; this module enforces the rules that need the
//! database: email uniqueness and password verification.

use sqlx::PgPool;
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::services::password;

/// Creates a new account from validated signup input.
///
/// The email doubles as the login identifier (`username`). The password is
/// argon2-hashed before the insert; nothing is written when any check fails.
///
/// # Errors
///
/// - [`AppError::DuplicateEmail`] - a user with this email already exists
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool, password), fields(email = %email))]
pub async fn create_account(db_pool: &PgPool, email: &str, password: &str) -> AppResult<User> {
    let email_taken: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(db_pool)
            .await?;

    if email_taken {
        warn!("Signup attempted with an email that is already in use");
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = password::hash_password(password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $1, $2)
        RETURNING id, username, email, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(&password_hash)
    .fetch_one(db_pool)
    .await
    .map_err(|e| match e {
        // A concurrent signup with the same email loses the race at the
        // unique constraint rather than at the pre-check above.
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateEmail
        }
        other => AppError::Db(other),
    })?;

    info!(user_id = %user.id, "User created successfully");
    Ok(user)
}

/// Checks a login attempt against the stored credentials.
///
/// The identifier may be the username or the email. Unknown identifiers and
/// wrong passwords produce the same generic failure.
///
/// # Errors
///
/// - [`AppError::AuthenticationFailure`] - no such user or wrong password
/// - [`AppError::Db`] - database failure
#[instrument(skip(db_pool, password), fields(identifier = %identifier))]
pub async fn authenticate(db_pool: &PgPool, identifier: &str, password: &str) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at
        FROM users
        WHERE username = $1 OR email = $1
        "#,
    )
    .bind(identifier)
    .fetch_optional(db_pool)
    .await?;

    let Some(user) = user else {
        warn!("Login attempted with unknown identifier");
        return Err(AppError::AuthenticationFailure);
    };

    if !password::verify_password(password, &user.password_hash) {
        warn!(user_id = %user.id, "Login attempted with wrong password");
        return Err(AppError::AuthenticationFailure);
    }

    info!(user_id = %user.id, "Credentials verified");
    Ok(user)
}
