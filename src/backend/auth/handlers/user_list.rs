/**
 * User List Handler
 *
 * GET /admin/userList returns every registered user. Password hashes are
 * never part of the response.
 */

use axum::extract::State;
use sqlx::SqlitePool;

use crate::backend::auth::users::fetch_users;
use crate::backend::error::BackendError;
use crate::shared::response::{Envelope, QueryCode};
use crate::shared::UserSummary;

/// List users handler
pub async fn list_users(
    State(pool): State<SqlitePool>,
) -> Result<Envelope<Vec<UserSummary>>, BackendError> {
    let users = fetch_users(&pool).await?;
    tracing::debug!("Listing {} users", users.len());

    Ok(Envelope::new(
        QueryCode::Ok,
        users.iter().map(|user| user.summary()).collect(),
    ))
}
