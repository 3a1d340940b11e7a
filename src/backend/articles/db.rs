//! Database operations for articles
//!
//! Every function is a single store operation except
//! `find_and_update_article`, which reads the previous `updateAt` and writes
//! the new values inside one `BEGIN IMMEDIATE` transaction so the timestamp
//! only moves forward. Concurrent updates wait on the write lock at `BEGIN`
//! rather than failing on a lock upgrade.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{Article, ArticleDraft, Meta};

#[derive(Debug, sqlx::FromRow)]
struct ArticleRow {
    id: String,
    title: Option<String>,
    intro: Option<String>,
    link: Option<String>,
    type_id: Option<String>,
    type_name: Option<String>,
    img: Option<String>,
    content: Option<String>,
    create_at: DateTime<Utc>,
    update_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            intro: row.intro,
            link: row.link,
            type_id: row.type_id,
            type_name: row.type_name,
            img: row.img,
            content: row.content,
            meta: Meta {
                create_at: row.create_at,
                update_at: row.update_at,
            },
        }
    }
}

/// Fetch every article without its body, least recently updated first
pub async fn fetch_articles(pool: &SqlitePool) -> Result<Vec<Article>, BackendError> {
    let rows = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, title, intro, link, type_id, type_name, img, content, create_at, update_at
        FROM articles
        ORDER BY update_at
        "#
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Article::from(row).without_content())
        .collect())
}

/// Get an article, body included
pub async fn find_article_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Article>, BackendError> {
    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, title, intro, link, type_id, type_name, img, content, create_at, update_at
        FROM articles
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Article::from))
}

/// Get the articles of one type
pub async fn find_articles_by_type_id(
    pool: &SqlitePool,
    type_id: &str,
) -> Result<Vec<Article>, BackendError> {
    let rows = sqlx::query_as::<_, ArticleRow>(
        r#"
        SELECT id, title, intro, link, type_id, type_name, img, content, create_at, update_at
        FROM articles
        WHERE type_id = ?
        ORDER BY update_at
        "#
    )
    .bind(type_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Article::from).collect())
}

/// Insert a new article from a draft
///
/// Any `_id` on the draft is ignored; a fresh identifier is generated.
pub async fn save_article(pool: &SqlitePool, draft: &ArticleDraft) -> Result<Article, BackendError> {
    let id = Uuid::new_v4().to_string();
    let meta = Meta::created(Utc::now());

    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        INSERT INTO articles (id, title, intro, link, type_id, type_name, img, content, create_at, update_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, intro, link, type_id, type_name, img, content, create_at, update_at
        "#
    )
    .bind(&id)
    .bind(value(&draft.title))
    .bind(value(&draft.intro))
    .bind(value(&draft.link))
    .bind(value(&draft.type_id))
    .bind(value(&draft.type_name))
    .bind(value(&draft.img))
    .bind(value(&draft.content))
    .bind(meta.create_at)
    .bind(meta.update_at)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Overwrite an article in place and stamp `meta.updateAt`
///
/// Fields absent from the draft keep their stored value; fields sent as
/// `null` are cleared. `createAt` and the identifier never change.
///
/// # Returns
/// The updated article, or None if no article has that identifier
pub async fn find_and_update_article(
    pool: &SqlitePool,
    id: &str,
    draft: &ArticleDraft,
) -> Result<Option<Article>, BackendError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let previous: Option<(DateTime<Utc>,)> =
        sqlx::query_as("SELECT update_at FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some((previous_update,)) = previous else {
        return Ok(None);
    };
    let update_at = Meta::next_update(previous_update, Utc::now());

    let row = sqlx::query_as::<_, ArticleRow>(
        r#"
        UPDATE articles
        SET title = CASE WHEN ? THEN ? ELSE title END,
            intro = CASE WHEN ? THEN ? ELSE intro END,
            link = CASE WHEN ? THEN ? ELSE link END,
            type_id = CASE WHEN ? THEN ? ELSE type_id END,
            type_name = CASE WHEN ? THEN ? ELSE type_name END,
            img = CASE WHEN ? THEN ? ELSE img END,
            content = CASE WHEN ? THEN ? ELSE content END,
            update_at = ?
        WHERE id = ?
        RETURNING id, title, intro, link, type_id, type_name, img, content, create_at, update_at
        "#
    )
    .bind(draft.title.is_some())
    .bind(value(&draft.title))
    .bind(draft.intro.is_some())
    .bind(value(&draft.intro))
    .bind(draft.link.is_some())
    .bind(value(&draft.link))
    .bind(draft.type_id.is_some())
    .bind(value(&draft.type_id))
    .bind(draft.type_name.is_some())
    .bind(value(&draft.type_name))
    .bind(draft.img.is_some())
    .bind(value(&draft.img))
    .bind(draft.content.is_some())
    .bind(value(&draft.content))
    .bind(update_at)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(row.into()))
}

/// Delete an article
///
/// # Returns
/// Number of rows removed (0 when the identifier is unknown)
pub async fn remove_article(pool: &SqlitePool, id: &str) -> Result<u64, BackendError> {
    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

fn value(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(Option::as_deref)
}
