/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Record the username in the caller's session
 *
 * # Result Codes
 *
 * - `0` - logged in
 * - `1` - no user with that username
 * - `2` - wrong password
 */
use axum::{extract::State, response::Json, Extension};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::sessions::Session;
use crate::backend::auth::users::find_user_by_username;
use crate::backend::error::BackendError;
use crate::shared::response::{Envelope, LoginCode};

/// Login handler
///
/// # Errors
///
/// Store failures and malformed stored hashes are reported through
/// `BackendError`.
pub async fn login(
    State(pool): State<SqlitePool>,
    Extension(session): Extension<Session>,
    Json(request): Json<LoginRequest>,
) -> Result<Envelope<&'static str>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let Some(user) = find_user_by_username(&pool, &request.username).await? else {
        tracing::warn!("User not found: {}", request.username);
        return Ok(Envelope::new(LoginCode::UnknownUser, "用户不存在"));
    };

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Ok(Envelope::new(LoginCode::WrongPassword, "密码不正确"));
    }

    session.set_user(&user.username).await;
    tracing::info!(
        "User logged in successfully: {} (session {})",
        user.username,
        session.id()
    );

    Ok(Envelope::new(LoginCode::Success, "登录成功"))
}
