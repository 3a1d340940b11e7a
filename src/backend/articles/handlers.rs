/**
 * Article HTTP Handlers
 *
 * Public reads:
 * - GET  /articles               - every article, without bodies
 * - GET  /articleDetail/{id}     - one article with its body
 * - GET  /articleList/{type_id}  - articles of one type
 *
 * Admin writes (not authorization-guarded):
 * - POST /admin/article/new      - create, or update when `_id` is present
 * - POST /admin/deleteArticle    - delete by `articleId`
 */

use axum::extract::{Path, State};
use axum::response::Json;
use sqlx::SqlitePool;

use crate::backend::articles::db;
use crate::backend::error::BackendError;
use crate::shared::response::{
    ArticleDetailCode, DeleteArticleCode, Envelope, QueryCode, SaveArticleCode,
};
use crate::shared::{Article, DeleteArticleRequest, SaveArticleRequest};

/// Reply to an update of an unknown article
pub const ARTICLE_NOT_FOUND_MESSAGE: &str = "文章不存在";

/// GET /articles
pub async fn list_articles(
    State(pool): State<SqlitePool>,
) -> Result<Envelope<Vec<Article>>, BackendError> {
    let articles = db::fetch_articles(&pool).await?;
    tracing::debug!("Listing {} articles", articles.len());
    Ok(Envelope::new(QueryCode::Ok, articles))
}

/// GET /articleDetail/{id}
///
/// An unknown id answers `errorCode` 1 with `data: null`.
pub async fn get_article(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Envelope<Option<Article>>, BackendError> {
    let article = db::find_article_by_id(&pool, &id).await?;
    let code = if article.is_some() {
        ArticleDetailCode::Found
    } else {
        tracing::debug!("Article not found: {}", id);
        ArticleDetailCode::NotFound
    };
    Ok(Envelope::new(code, article))
}

/// GET /articleList/{type_id}
pub async fn list_articles_by_type(
    State(pool): State<SqlitePool>,
    Path(type_id): Path<String>,
) -> Result<Envelope<Vec<Article>>, BackendError> {
    let articles = db::find_articles_by_type_id(&pool, &type_id).await?;
    Ok(Envelope::new(QueryCode::Ok, articles))
}

/// POST /admin/article/new
///
/// Without `_id` the draft is inserted (`errorCode` 0); with one, the stored
/// article is updated (`errorCode` 1) or reported missing (`errorCode` 2).
/// The written article's id comes back as `articleId`.
pub async fn save_article(
    State(pool): State<SqlitePool>,
    Json(request): Json<SaveArticleRequest>,
) -> Result<Envelope<&'static str>, BackendError> {
    let draft = request.article;

    let Some(id) = draft.id.as_deref() else {
        let article = db::save_article(&pool, &draft).await?;
        tracing::info!("Article created: {}", article.id);
        return Ok(Envelope::new(SaveArticleCode::Created, "添加成功").article_id(article.id));
    };

    match db::find_and_update_article(&pool, id, &draft).await? {
        Some(article) => {
            tracing::info!("Article updated: {}", article.id);
            Ok(Envelope::new(SaveArticleCode::Updated, "更新成功").article_id(article.id))
        }
        None => {
            tracing::warn!("Update of unknown article: {}", id);
            Ok(Envelope::new(SaveArticleCode::NotFound, ARTICLE_NOT_FOUND_MESSAGE))
        }
    }
}

/// POST /admin/deleteArticle
///
/// Deleting an unknown (or missing) id is not an error.
pub async fn delete_article(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteArticleRequest>,
) -> Result<Envelope<&'static str>, BackendError> {
    if let Some(id) = request.article_id.as_deref() {
        let removed = db::remove_article(&pool, id).await?;
        tracing::info!("Deleted {} article(s) with id {}", removed, id);
    }

    Ok(Envelope::new(DeleteArticleCode::Deleted, "删除成功"))
}
