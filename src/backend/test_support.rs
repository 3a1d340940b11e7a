//! Fixtures shared by the backend's unit tests.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use tempfile::TempDir;

use crate::backend::server::config::{load_database, run_migrations};

/// A migrated, private in-memory store
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to a single connection that never expires.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// A migrated store in a temporary file, with several connections
///
/// For tests that need real concurrent writers. Keep the directory alive for
/// as long as the pool is used.
pub async fn file_pool() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("blog.db").display());
    let pool = load_database(&url, 5)
        .await
        .expect("Failed to open file database");
    (dir, pool)
}
