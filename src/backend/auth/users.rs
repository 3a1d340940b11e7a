/**
 * User Model and Database Operations
 *
 * This module handles user rows and their store operations.
 *
 * Username uniqueness is enforced by the store's unique index; `save_user`
 * surfaces a violation as a duplicate-key `BackendError`.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::{Meta, UserSummary};

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// Unique login name
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl User {
    /// Public view of the user, without the password hash
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
            meta: Meta {
                create_at: self.create_at,
                update_at: self.update_at,
            },
        }
    }
}

/// Fetch every user, oldest first
pub async fn fetch_users(pool: &SqlitePool) -> Result<Vec<User>, BackendError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, create_at, update_at
        FROM users
        ORDER BY create_at
        "#
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn find_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, BackendError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, create_at, update_at
        FROM users
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, BackendError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, create_at, update_at
        FROM users
        WHERE username = ?
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Errors
/// A duplicate-key store error if the username is taken
pub async fn save_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, BackendError> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, create_at, update_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, username, password_hash, create_at, update_at
        "#
    )
    .bind(&id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::test_pool;

    #[tokio::test]
    async fn test_save_and_find_user() {
        let pool = test_pool().await;

        let user = save_user(&pool, "waka", "hash").await.unwrap();
        assert_eq!(user.username, "waka");

        let by_name = find_user_by_username(&pool, "waka").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);

        let by_id = find_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "waka");

        assert!(find_user_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected_by_store() {
        let pool = test_pool().await;
        save_user(&pool, "waka", "hash").await.unwrap();

        let err = save_user(&pool, "waka", "other").await.unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(fetch_users(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summary_hides_password_hash() {
        let pool = test_pool().await;
        let user = save_user(&pool, "waka", "secret-hash").await.unwrap();

        let json = serde_json::to_string(&user.summary()).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"_id\""));
    }
}
