/**
 * Backend Error Types
 *
 * This module defines the error type returned by every handler, middleware
 * and data-access function of the blog backend.
 *
 * # Error Codes
 *
 * Every variant maps to the integer reported as `errorCode` in the response
 * envelope:
 *
 * - Store errors carry the store's own code. Unique-constraint violations are
 *   normalized to [`DUPLICATE_KEY`] whatever the driver reports.
 * - Everything else (hashing, session signing, task failures) reports
 *   [`UNKNOWN_ERROR`].
 */

use thiserror::Error;

use crate::backend::server::config::ConfigError;

/// `errorCode` for a unique-constraint violation in the store
pub const DUPLICATE_KEY: i64 = 11000;

/// `errorCode` for failures that carry no store code of their own
pub const UNKNOWN_ERROR: i64 = 8;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blogwaka::backend::error::{BackendError, DUPLICATE_KEY};
///
/// let err = BackendError::store(DUPLICATE_KEY, "UNIQUE constraint failed: users.username");
/// assert!(err.is_duplicate_key());
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Store error (query failure, constraint violation, pool exhaustion)
    #[error("Store error {code}: {message}")]
    StoreError {
        /// Store-provided error code
        code: i64,
        /// Store-provided (or rewritten) message
        message: String,
    },

    /// Password hashing or verification failed
    #[error("Password error: {0}")]
    PasswordError(#[from] bcrypt::BcryptError),

    /// Session cookie could not be signed
    #[error("Session token error: {0}")]
    SessionError(#[from] jsonwebtoken::errors::Error),

    /// A response header could not be built
    #[error("Invalid header value: {0}")]
    HeaderError(#[from] axum::http::header::InvalidHeaderValue),

    /// A blocking task (password hashing) panicked or was cancelled
    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    /// Schema migrations could not be applied at startup
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Invalid server configuration
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl BackendError {
    /// Create a new store error
    pub fn store(code: i64, message: impl Into<String>) -> Self {
        Self::StoreError {
            code,
            message: message.into(),
        }
    }

    /// Whether this is a unique-constraint violation reported by the store
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::StoreError { code, .. } if *code == DUPLICATE_KEY)
    }

    /// Replace the message of a store error, keeping its code
    ///
    /// Other variants are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::StoreError { code, .. } => Self::store(code, message),
            other => other,
        }
    }

    /// The `errorCode` reported for this error
    pub fn error_code(&self) -> i64 {
        match self {
            Self::StoreError { code, .. } => *code,
            _ => UNKNOWN_ERROR,
        }
    }

    /// The message reported as `data` for this error
    pub fn message(&self) -> String {
        match self {
            Self::StoreError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::store(DUPLICATE_KEY, db.message())
            }
            sqlx::Error::Database(db) => {
                let code = db
                    .code()
                    .and_then(|code| code.parse::<i64>().ok())
                    .unwrap_or(UNKNOWN_ERROR);
                Self::store(code, db.message())
            }
            _ => Self::store(UNKNOWN_ERROR, err.to_string()),
        }
    }
}
