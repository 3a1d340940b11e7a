//! Account test helpers

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use blogwaka::backend::auth::users::{save_user, User};
use serde_json::json;
use sqlx::SqlitePool;

use super::database::api;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Create a test user directly in the store
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, 4).expect("Failed to hash password");
    let user: User = save_user(pool, username, &password_hash)
        .await
        .expect("Failed to create test user");

    TestUser {
        id: user.id,
        username: user.username,
        password: password.to_string(),
    }
}

/// POST /signUp
pub async fn signup(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post(&api("/signUp"))
        .json(&json!({ "username": username, "password": password }))
        .await
}

/// POST /login
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post(&api("/login"))
        .json(&json!({ "username": username, "password": password }))
        .await
}

/// The `name=value` part of the response's session cookie, if one was set
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("blogwaka.sid="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Cookie header carrying a session cookie
pub fn cookie_header(cookie: &str) -> (HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(cookie).expect("Invalid cookie header"),
    )
}
