//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request types
//! ├── signup.rs    - POST /signUp
//! ├── login.rs     - POST /login
//! └── user_list.rs - GET /admin/userList
//! ```

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// User list handler
pub mod user_list;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest};

// Re-export handlers
pub use login::login;
pub use signup::signup;
pub use user_list::list_users;
