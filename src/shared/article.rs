/**
 * Article Data Structures
 *
 * This module defines the article document returned by the blog API and the
 * draft submitted by the admin editor.
 *
 * Field names follow the wire format the front-end already speaks:
 * `_id`, `typeId`, `typeName`, `meta.createAt`, `meta.updateAt`.
 */
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Creation and update timestamps carried by every stored document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// When the document was first saved
    pub create_at: DateTime<Utc>,
    /// When the document was last saved
    pub update_at: DateTime<Utc>,
}

impl Meta {
    /// Timestamps for a document saved at `now`
    pub fn created(now: DateTime<Utc>) -> Self {
        Self {
            create_at: now,
            update_at: now,
        }
    }

    /// The `updateAt` value for the next save
    ///
    /// Always strictly later than `previous`, even when the clock has not
    /// moved on (or moved backwards) since the last save.
    pub fn next_update(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
        let floor = previous + Duration::milliseconds(1);
        if now < floor {
            floor
        } else {
            now
        }
    }
}

/// A blog article
///
/// `content` is omitted from the JSON when absent, which is how list views
/// ship articles without their body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article identifier (UUID string)
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    /// Short introduction shown in list views
    pub intro: Option<String>,
    /// External link
    pub link: Option<String>,
    /// Identifier of the article's type (not checked against the types table)
    pub type_id: Option<String>,
    /// Denormalized type name
    pub type_name: Option<String>,
    /// Image reference
    pub img: Option<String>,
    /// Full article body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub meta: Meta,
}

impl Article {
    /// Drop the body, keeping everything a list view needs
    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }
}

/// Article fields as submitted by the admin editor
///
/// Nothing is validated. Each field distinguishes absent (`None`) from an
/// explicit JSON `null` (`Some(None)`): on insert both are stored as `NULL`,
/// on update an absent field keeps its stored value while `null` clears it.
/// A present `_id` turns the submission into an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub intro: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub img: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
}

// Only called for keys that are present, so `null` lands as `Some(None)`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Body of `POST /admin/article/new`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveArticleRequest {
    #[serde(default)]
    pub article: ArticleDraft,
}

/// Body of `POST /admin/deleteArticle`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArticleRequest {
    #[serde(default)]
    pub article_id: Option<String>,
}
