/**
 * Article Type Data Structures
 *
 * A type groups articles (the blog's categories). Names are unique.
 */
use serde::{Deserialize, Serialize};

use crate::shared::article::Meta;

/// A stored article type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleType {
    /// Type identifier (UUID string)
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable, unique name
    pub type_name: Option<String>,
    pub meta: Meta,
}

/// Type fields as submitted by the admin editor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDraft {
    /// Accepted for compatibility with the editor; types are never updated
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
}

/// Body of `POST /admin/type/new`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTypeRequest {
    #[serde(rename = "type", default)]
    pub article_type: TypeDraft,
}
