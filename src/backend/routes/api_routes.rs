/**
 * API Route Table
 *
 * Paths are relative to the API prefix (`/blogWaka` by default).
 *
 * # Routes
 *
 * ## Articles
 * - `GET /articles` - Every article, without bodies
 * - `GET /articleDetail/{id}` - One article with its body
 * - `GET /articleList/{type_id}` - Articles of one type
 * - `POST /admin/article/new` - Create or update an article
 * - `POST /admin/deleteArticle` - Delete an article
 *
 * ## Types
 * - `GET /types` - Every type
 * - `POST /admin/type/new` - Create a type
 *
 * ## Accounts
 * - `POST /login` - Log in, recording the user in the session
 * - `POST /signUp` - Register
 * - `GET /admin/userList` - Every user, without password hashes
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::article_types::{create_type, list_types};
use crate::backend::articles::{
    delete_article, get_article, list_articles, list_articles_by_type, save_article,
};
use crate::backend::auth::{list_users, login, signup};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The `/admin` routes are not authorization-guarded.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Articles
        .route("/articles", get(list_articles))
        .route("/articleDetail/{id}", get(get_article))
        .route("/articleList/{type_id}", get(list_articles_by_type))
        .route("/admin/article/new", post(save_article))
        .route("/admin/deleteArticle", post(delete_article))
        // Types
        .route("/types", get(list_types))
        .route("/admin/type/new", post(create_type))
        // Accounts
        .route("/login", post(login))
        .route("/signUp", post(signup))
        .route("/admin/userList", get(list_users))
}
