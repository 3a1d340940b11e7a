//! Shared Module
//!
//! Wire types of the blog API: the documents the front-end reads, the drafts
//! the admin editor submits, and the `{errorCode, data}` envelope wrapping
//! every response. Nothing here touches the store or the HTTP stack.

/// Articles and article drafts
pub mod article;

/// Article types (categories)
pub mod article_type;

/// Public user view
pub mod user;

/// Response envelope and per-route result codes
pub mod response;

/// Re-export commonly used types for convenience
pub use article::{Article, ArticleDraft, DeleteArticleRequest, Meta, SaveArticleRequest};
pub use article_type::{ArticleType, CreateTypeRequest, TypeDraft};
pub use response::{Envelope, ResultCode};
pub use user::UserSummary;
