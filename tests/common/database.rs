//! Database and server fixtures
//!
//! Every fixture owns a private in-memory SQLite store and a temporary
//! static directory, so tests never share state.

use std::fs;

use axum_test::TestServer;
use blogwaka::backend::auth::SessionStore;
use blogwaka::backend::routes::create_router;
use blogwaka::backend::server::config::run_migrations;
use blogwaka::backend::server::AppState;
use blogwaka::backend::{build_app, ServerConfig};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tempfile::TempDir;

/// API prefix used by every fixture
pub const PREFIX: &str = "/blogWaka";

/// Body of the fixture's `index.html`
pub const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

/// Secret signing the fixture's session cookies
pub const TEST_SECRET: &str = "test-secret";

/// Create a migrated in-memory pool
///
/// A `:memory:` database lives as long as its connection, so the pool holds
/// exactly one connection that is never recycled.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Test database fixture
///
/// Holds the store, the static directory and the configuration the server
/// is built from.
pub struct TestDatabase {
    pool: SqlitePool,
    static_dir: TempDir,
}

impl TestDatabase {
    /// Create a new fixture with an empty store
    pub async fn new() -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        fs::write(static_dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");
        fs::write(static_dir.path().join("app.js"), "console.log('waka');")
            .expect("Failed to write app.js");

        Self {
            pool: create_test_pool().await,
            static_dir,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Configuration of the server under test
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            api_prefix: PREFIX.to_string(),
            static_dir: self.static_dir.path().to_path_buf(),
            session_secret: TEST_SECRET.to_string(),
            session_ttl_secs: 60,
            bcrypt_cost: 4,
            ..ServerConfig::default()
        }
    }

    /// Start a test server over this fixture's store
    pub fn server(&self) -> TestServer {
        self.server_with(self.config())
    }

    /// Start a test server with a custom configuration
    pub fn server_with(&self, config: ServerConfig) -> TestServer {
        TestServer::new(build_app(config, self.pool.clone())).expect("Failed to start test server")
    }

    /// Start a test server and keep a handle on its session store
    pub fn server_with_sessions(&self) -> (TestServer, SessionStore) {
        let state = AppState::new(self.pool.clone(), self.config());
        let sessions = state.sessions.clone();
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");
        (server, sessions)
    }
}

/// Full path of an API route
pub fn api(path: &str) -> String {
    format!("{PREFIX}{path}")
}
