//! Authentication Module
//!
//! This module handles user accounts, password hashing, and sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - User rows and store operations
//! ├── passwords.rs - bcrypt hashing off the async workers
//! ├── sessions.rs  - Session store and signed session cookie
//! └── handlers/    - HTTP handlers (signup, login, user list)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username and password → password hashed → user created
//! 2. **Login**: username and password → hash verified → username stored in session
//!
//! The admin routes do not consult the session.

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// Session store and cookie signing
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{list_users, login, signup, LoginRequest, SignupRequest};
pub use sessions::{Session, SessionStore, SESSION_COOKIE};
