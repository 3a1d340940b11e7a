/**
 * Authentication Handler Types
 *
 * Request bodies of the login and signup handlers. Missing fields
 * deserialize to empty strings; nothing is validated.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    /// Plaintext password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}
