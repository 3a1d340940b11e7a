//! Database operations for article types

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{ArticleType, Meta, TypeDraft};

#[derive(Debug, sqlx::FromRow)]
struct TypeRow {
    id: String,
    type_name: Option<String>,
    create_at: DateTime<Utc>,
    update_at: DateTime<Utc>,
}

impl From<TypeRow> for ArticleType {
    fn from(row: TypeRow) -> Self {
        ArticleType {
            id: row.id,
            type_name: row.type_name,
            meta: Meta {
                create_at: row.create_at,
                update_at: row.update_at,
            },
        }
    }
}

/// Fetch every type, oldest first
pub async fn fetch_types(pool: &SqlitePool) -> Result<Vec<ArticleType>, BackendError> {
    let rows = sqlx::query_as::<_, TypeRow>(
        "SELECT id, type_name, create_at, update_at FROM types ORDER BY create_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ArticleType::from).collect())
}

pub async fn find_type_by_id(pool: &SqlitePool, id: &str) -> Result<Option<ArticleType>, BackendError> {
    let row = sqlx::query_as::<_, TypeRow>(
        "SELECT id, type_name, create_at, update_at FROM types WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ArticleType::from))
}

/// Find a type by name
///
/// `None` matches a type stored without a name.
pub async fn find_type_by_name(
    pool: &SqlitePool,
    type_name: Option<&str>,
) -> Result<Option<ArticleType>, BackendError> {
    let row = sqlx::query_as::<_, TypeRow>(
        "SELECT id, type_name, create_at, update_at FROM types WHERE type_name IS ? LIMIT 1",
    )
    .bind(type_name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ArticleType::from))
}

/// Insert a new type
///
/// # Errors
/// A duplicate-key store error if the name is taken
pub async fn save_type(pool: &SqlitePool, draft: &TypeDraft) -> Result<ArticleType, BackendError> {
    let id = Uuid::new_v4().to_string();
    let meta = Meta::created(Utc::now());

    let row = sqlx::query_as::<_, TypeRow>(
        r#"
        INSERT INTO types (id, type_name, create_at, update_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, type_name, create_at, update_at
        "#
    )
    .bind(&id)
    .bind(&draft.type_name)
    .bind(meta.create_at)
    .bind(meta.update_at)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}
