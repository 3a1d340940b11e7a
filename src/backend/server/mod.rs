//! Server Module
//!
//! Everything needed to turn a [`ServerConfig`] into a running router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and store setup
//! └── init.rs         - App creation, background tasks, shutdown
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store**: open the SQLite pool and run migrations (fatal on failure)
//! 3. **State Creation**: pool, session store, shared configuration
//! 4. **Background Tasks**: periodic purge of expired sessions
//! 5. **Router Creation**: API routes, session middleware, SPA fallback

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{build_app, create_app, shutdown_signal};
pub use state::AppState;
