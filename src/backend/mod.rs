//! Backend Module
//!
//! This module contains all server-side code of the blog: an Axum HTTP
//! server exposing the article, type and account API over a SQLite store,
//! and serving the single-page front-end.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route table and router assembly
//! - **`articles`** - Article store operations and handlers
//! - **`article_types`** - Type store operations and handlers
//! - **`auth`** - Users, password hashing, sessions, account handlers
//! - **`middleware`** - Session middleware
//! - **`error`** - Backend error type and its response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── articles/       - Articles
//! ├── article_types/  - Article types
//! ├── auth/           - Accounts and sessions
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Responses
//!
//! Every API route answers `200 OK` with `{errorCode, data}`. Failures are
//! reported inside that envelope, never through the HTTP status.
//!
//! # Example
//!
//! ```rust,no_run
//! use blogwaka::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Articles
pub mod articles;

/// Article types
pub mod article_types;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{build_app, create_app, ServerConfig};
