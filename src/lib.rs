//! BlogWaka - Main Library
//!
//! Backend of a small blog: articles grouped by type, an admin editor that
//! creates and updates them, and user accounts with cookie sessions.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types: articles, types, users, the response envelope
//! - **`backend`** - Axum server, SQLite store, handlers, sessions
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogwaka::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
