//! Backend Error Module
//!
//! Error types of the blog backend and their conversion into the
//! `{errorCode, data}` response envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and error codes
//! └── conversion.rs - IntoResponse implementations
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, DUPLICATE_KEY, UNKNOWN_ERROR};
