/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite store and apply migrations
 * 2. Create the application state (pool, sessions, configuration)
 * 3. Start the periodic session purge
 * 4. Create and configure the router
 */

use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Errors
///
/// The store is required: failing to open or migrate it aborts startup.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing blog backend server");

    let pool = load_database(&config.database_url, config.max_connections).await?;
    let app_state = AppState::new(pool, config);

    spawn_session_purge(app_state.sessions.clone());
    tracing::info!("Router configured with periodic session purge");

    Ok(create_router(app_state))
}

/// Build the router around an already opened pool
///
/// No background task is started.
pub fn build_app(config: ServerConfig, pool: SqlitePool) -> Router<()> {
    create_router(AppState::new(pool, config))
}

fn spawn_session_purge(sessions: SessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                tracing::debug!(
                    "Purged {} expired sessions, {} remain",
                    removed,
                    sessions.len().await
                );
            }
        }
    });
}

/// Resolve on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
