/**
 * User Data Structures
 *
 * The public view of a user account. The stored password hash lives only in
 * the backend row type and is never serialized.
 */
use serde::{Deserialize, Serialize};

use crate::shared::article::Meta;

/// A registered user, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User identifier (UUID string)
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique login name
    pub username: String,
    pub meta: Meta,
}
