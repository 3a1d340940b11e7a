/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signUp.
 *
 * # Registration Process
 *
 * 1. Hash password using bcrypt
 * 2. Create user in database
 *
 * Username uniqueness is left to the store. A duplicate username comes back
 * as the regular duplicate-key store error, with its message replaced by a
 * user-facing one.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::save_user;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;
use crate::shared::response::{Envelope, SignupCode};

/// Message reported when the username is already registered
pub const DUPLICATE_USER_MESSAGE: &str = "该用户已注册";

/// Sign up handler
///
/// # Errors
///
/// * Duplicate-key store error with [`DUPLICATE_USER_MESSAGE`] if the username is taken
/// * Other store or hashing failures as-is
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<SignupRequest>,
) -> Result<Envelope<&'static str>, BackendError> {
    tracing::info!("Signup request for username: {}", request.username);

    let password_hash = hash_password(&request.password, config.bcrypt_cost).await?;

    let user = save_user(&pool, &request.username, &password_hash)
        .await
        .map_err(|err| {
            if err.is_duplicate_key() {
                tracing::warn!("Username already exists: {}", request.username);
                err.with_message(DUPLICATE_USER_MESSAGE)
            } else {
                err
            }
        })?;

    tracing::info!("User created successfully: {}", user.username);

    Ok(Envelope::new(SignupCode::Registered, "注册成功"))
}
