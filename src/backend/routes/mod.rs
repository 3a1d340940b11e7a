//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation (prefix, middleware, SPA fallback)
//! └── api_routes.rs   - Blog API route table
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - Articles, types and accounts under the API prefix
//! 2. **Fallback Service** - Static files, then `index.html`

/// Main router creation
pub mod router;

/// API route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
