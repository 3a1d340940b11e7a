//! Articles
//!
//! Data access (`db`) and HTTP handlers for blog articles.

pub mod db;
pub mod handlers;

pub use handlers::{delete_article, get_article, list_articles, list_articles_by_type, save_article};
