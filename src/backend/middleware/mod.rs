//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`session`** - Attaches a cookie-backed session to every API request

pub mod session;

pub use session::{cookie_value, session_middleware};
