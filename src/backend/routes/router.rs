/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layout
 *
 * 1. API routes, mounted under the configured prefix, each request passing
 *    through the session middleware
 * 2. Fallback: files from the static directory, and `index.html` for any
 *    path that is not a file (client-side routing)
 * 3. Request tracing around everything
 */

use axum::{middleware, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::middleware::session::session_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, sessions, configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new()).layer(middleware::from_fn_with_state(
        app_state.clone(),
        session_middleware,
    ));

    // `nest` rejects the root path, so a bare "/" prefix merges instead.
    let prefix = app_state.config.api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    let static_dir = &app_state.config.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    tracing::debug!("Serving static files from {}", static_dir.display());

    router
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
