//! Article types
//!
//! Data access (`db`) and HTTP handlers for the blog's categories.

pub mod db;
pub mod handlers;

pub use handlers::{create_type, list_types};
