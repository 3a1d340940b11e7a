/**
 * Article Type HTTP Handlers
 *
 * - GET  /types           - every type
 * - POST /admin/type/new  - create a type unless the name is taken
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::backend::article_types::db;
use crate::backend::error::BackendError;
use crate::shared::response::{CreateTypeCode, Envelope, QueryCode};
use crate::shared::{ArticleType, CreateTypeRequest, TypeDraft};

/// Reply when the type name is already taken
pub const DUPLICATE_TYPE_MESSAGE: &str = "已有该类型";

/// GET /types
pub async fn list_types(
    State(pool): State<SqlitePool>,
) -> Result<Envelope<Vec<ArticleType>>, BackendError> {
    let types = db::fetch_types(&pool).await?;
    Ok(Envelope::new(QueryCode::Ok, types))
}

/// POST /admin/type/new
///
/// Answers `-1` when a type with that name exists, whether the lookup finds
/// it or a concurrent insert wins the unique index.
pub async fn create_type(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateTypeRequest>,
) -> Result<Envelope<&'static str>, BackendError> {
    let draft = request.article_type;
    let name = draft.type_name.as_deref();

    if db::find_type_by_name(&pool, name).await?.is_some() {
        tracing::warn!("Type already exists: {:?}", name);
        return Ok(Envelope::new(CreateTypeCode::Duplicate, DUPLICATE_TYPE_MESSAGE));
    }

    insert_type(&pool, &draft).await
}

/// Insert after the name lookup missed; the unique index still settles races.
async fn insert_type(
    pool: &SqlitePool,
    draft: &TypeDraft,
) -> Result<Envelope<&'static str>, BackendError> {
    match db::save_type(pool, draft).await {
        Ok(saved) => {
            tracing::info!("Type created: {} ({:?})", saved.id, saved.type_name);
            Ok(Envelope::new(CreateTypeCode::Created, "添加成功").type_id(saved.id))
        }
        Err(err) if err.is_duplicate_key() => {
            tracing::warn!("Type created concurrently: {:?}", draft.type_name);
            Ok(Envelope::new(CreateTypeCode::Duplicate, DUPLICATE_TYPE_MESSAGE))
        }
        Err(err) => Err(err),
    }
}
