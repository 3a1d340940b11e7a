//! Article API integration tests
//!
//! Create, update, read and delete articles through the HTTP surface.

mod common;

use common::{api, assert_envelope, assert_message, TestDatabase};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn article_body(title: &str, type_id: &str) -> Value {
    json!({
        "article": {
            "title": title,
            "intro": format!("{title} intro"),
            "link": "https://example.com",
            "typeId": type_id,
            "typeName": "tech",
            "img": "cover.png",
            "content": format!("{title} content"),
        }
    })
}

#[tokio::test]
async fn test_create_article_returns_fresh_id() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let first = server.post(&api("/admin/article/new")).json(&article_body("Rust", "t1")).await;
    let first = assert_message(&first, 0, "添加成功");

    let second = server.post(&api("/admin/article/new")).json(&article_body("Rust", "t1")).await;
    let second = assert_message(&second, 0, "添加成功");

    let first_id = first["articleId"].as_str().unwrap();
    let second_id = second["articleId"].as_str().unwrap();
    assert_ne!(first_id, second_id);

    let list = server.get(&api("/articles")).await;
    let list = assert_envelope(&list, 0);
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_article_detail_includes_content() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let created = server.post(&api("/admin/article/new")).json(&article_body("Axum", "t1")).await;
    let id = assert_envelope(&created, 0)["articleId"].as_str().unwrap().to_string();

    let detail = server.get(&api(&format!("/articleDetail/{id}"))).await;
    let detail = assert_envelope(&detail, 0);
    let article = &detail["data"];

    assert_eq!(article["_id"], id.as_str());
    assert_eq!(article["title"], "Axum");
    assert_eq!(article["content"], "Axum content");
    assert_eq!(article["typeId"], "t1");
    assert_eq!(article["typeName"], "tech");
    assert_eq!(article["meta"]["createAt"], article["meta"]["updateAt"]);
}

#[tokio::test]
async fn test_article_detail_unknown_id() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let detail = server.get(&api("/articleDetail/does-not-exist")).await;
    let detail = assert_envelope(&detail, 1);
    assert_eq!(detail["data"], Value::Null);
}

#[tokio::test]
async fn test_list_articles_strips_content() {
    let db = TestDatabase::new().await;
    let server = db.server();

    for title in ["One", "Two", "Three"] {
        server.post(&api("/admin/article/new")).json(&article_body(title, "t1")).await;
    }

    let list = server.get(&api("/articles")).await;
    let list = assert_envelope(&list, 0);
    let articles = list["data"].as_array().unwrap();

    assert_eq!(articles.len(), 3);
    for article in articles {
        assert!(article.get("content").is_none(), "content leaked: {article}");
        assert!(article["title"].is_string());
        assert!(article["meta"]["updateAt"].is_string());
    }
}

#[tokio::test]
async fn test_list_articles_by_type() {
    let db = TestDatabase::new().await;
    let server = db.server();

    server.post(&api("/admin/article/new")).json(&article_body("A", "tech-id")).await;
    server.post(&api("/admin/article/new")).json(&article_body("B", "life-id")).await;
    server.post(&api("/admin/article/new")).json(&article_body("C", "tech-id")).await;

    let list = server.get(&api("/articleList/tech-id")).await;
    let list = assert_envelope(&list, 0);
    let articles = list["data"].as_array().unwrap();

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a["typeId"] == "tech-id"));

    let empty = server.get(&api("/articleList/nothing")).await;
    assert_eq!(assert_envelope(&empty, 0)["data"], json!([]));
}

#[tokio::test]
async fn test_update_article_preserves_id_and_advances_update_at() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let created = server.post(&api("/admin/article/new")).json(&article_body("Draft", "t1")).await;
    let id = assert_envelope(&created, 0)["articleId"].as_str().unwrap().to_string();

    let before = server.get(&api(&format!("/articleDetail/{id}"))).await;
    let before = assert_envelope(&before, 0)["data"].clone();

    let updated = server
        .post(&api("/admin/article/new"))
        .json(&json!({ "article": { "_id": id, "title": "Final", "content": "Final content" } }))
        .await;
    let updated = assert_message(&updated, 1, "更新成功");
    assert_eq!(updated["articleId"], id.as_str());

    let after = server.get(&api(&format!("/articleDetail/{id}"))).await;
    let after = assert_envelope(&after, 0)["data"].clone();

    assert_eq!(after["_id"], id.as_str());
    assert_eq!(after["title"], "Final");
    assert_eq!(after["content"], "Final content");
    // Fields left out of the update keep their stored value
    assert_eq!(after["intro"], "Draft intro");
    assert_eq!(after["meta"]["createAt"], before["meta"]["createAt"]);

    let parse = |value: &Value| {
        value.as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().unwrap()
    };
    assert!(parse(&after["meta"]["updateAt"]) > parse(&before["meta"]["updateAt"]));

    let list = server.get(&api("/articles")).await;
    assert_eq!(assert_envelope(&list, 0)["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_with_null_clears_field() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let created = server.post(&api("/admin/article/new")).json(&article_body("Linked", "t1")).await;
    let id = assert_envelope(&created, 0)["articleId"].as_str().unwrap().to_string();

    let updated = server
        .post(&api("/admin/article/new"))
        .json(&json!({ "article": { "_id": id, "intro": null } }))
        .await;
    assert_message(&updated, 1, "更新成功");

    let after = server.get(&api(&format!("/articleDetail/{id}"))).await;
    let after = assert_envelope(&after, 0)["data"].clone();
    assert_eq!(after["intro"], Value::Null);
    assert_eq!(after["title"], "Linked");
}

#[tokio::test]
async fn test_update_unknown_article() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let response = server
        .post(&api("/admin/article/new"))
        .json(&json!({ "article": { "_id": "missing", "title": "Ghost" } }))
        .await;
    assert_message(&response, 2, "文章不存在");

    let list = server.get(&api("/articles")).await;
    assert_eq!(assert_envelope(&list, 0)["data"], json!([]));
}

#[tokio::test]
async fn test_create_article_with_missing_fields() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let created = server.post(&api("/admin/article/new")).json(&json!({ "article": {} })).await;
    let id = assert_envelope(&created, 0)["articleId"].as_str().unwrap().to_string();

    let detail = server.get(&api(&format!("/articleDetail/{id}"))).await;
    let article = assert_envelope(&detail, 0)["data"].clone();
    assert_eq!(article["title"], Value::Null);
    assert_eq!(article["typeId"], Value::Null);
}

#[tokio::test]
async fn test_delete_article() {
    let db = TestDatabase::new().await;
    let server = db.server();

    let created = server.post(&api("/admin/article/new")).json(&article_body("Bye", "t1")).await;
    let id = assert_envelope(&created, 0)["articleId"].as_str().unwrap().to_string();

    let deleted = server
        .post(&api("/admin/deleteArticle"))
        .json(&json!({ "articleId": id }))
        .await;
    assert_message(&deleted, 0, "删除成功");

    let detail = server.get(&api(&format!("/articleDetail/{id}"))).await;
    assert_envelope(&detail, 1);

    // Deleting again, or without an id, is still a success
    let again = server
        .post(&api("/admin/deleteArticle"))
        .json(&json!({ "articleId": id }))
        .await;
    assert_message(&again, 0, "删除成功");

    let without_id = server.post(&api("/admin/deleteArticle")).json(&json!({})).await;
    assert_message(&without_id, 0, "删除成功");
}
