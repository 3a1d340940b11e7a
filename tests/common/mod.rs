//! Common test utilities and helpers
//!
//! This module provides shared utilities for all integration tests:
//! - Database and server fixtures
//! - Account helpers
//! - Envelope assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
