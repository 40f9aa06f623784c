use axum::http::StatusCode;
use axum_test::TestServer;
use folio::{
    AppState, Config, create_app, create_router,
    catalog::ContentCatalog,
    chat::{FALLBACK_RESPONSE, GREETING},
    preferences::Preferences,
    storage::{FileStorageConfig, StorageConfig, providers::memory::MemoryProvider},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

async fn setup_test_server() -> TestServer {
    let mut config = Config::default();
    config.chat.typing_delay_ms = 0;
    config.storage = StorageConfig::Memory;

    let preferences = Preferences::load(Arc::new(MemoryProvider::new())).await;
    let app_state = AppState::new(Arc::new(ContentCatalog::builtin()), preferences, config);
    TestServer::new(create_router(app_state)).unwrap()
}

#[tokio::test]
async fn test_chat_answers_with_topic() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "What are your skills?" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["topic"], "skills");
    assert!(body["response"].as_str().unwrap().contains("React/Next.js"));
}

#[tokio::test]
async fn test_chat_fallback_and_blank_message() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "xyzzy" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["response"], FALLBACK_RESPONSE);
    assert_eq!(body["topic"], Value::Null);

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_prompts() {
    let server = setup_test_server().await;

    let response = server.get("/api/chat/prompts").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["greeting"], GREETING);
    assert_eq!(body["prompts"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_posts_and_related() {
    let server = setup_test_server().await;

    let response = server.get("/api/posts").await;
    response.assert_status_ok();
    let posts: Value = response.json();
    assert_eq!(posts.as_array().unwrap().len(), 3);
    assert_eq!(posts[0]["slug"], "ai-chat-assistant");

    let response = server.get("/api/posts/ai-chat-assistant/related").await;
    response.assert_status_ok();
    let related: Value = response.json();
    // Shares the "React" topic.
    assert_eq!(related[0]["slug"], "optimizing-react-applications");

    let response = server.get("/api/posts/unknown/related").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_bookmark_lifecycle() {
    let server = setup_test_server().await;

    let response = server.put("/api/bookmarks/ai-chat-assistant").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["bookmarked"], true);

    server.put("/api/bookmarks/ai-chat-assistant").await.assert_status_ok();

    let body: Value = server.get("/api/bookmarks").await.json();
    assert_eq!(body["bookmarks"], json!(["ai-chat-assistant"]));

    let response = server.delete("/api/bookmarks/ai-chat-assistant").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["bookmarked"], false);

    let body: Value = server.get("/api/bookmarks").await.json();
    assert_eq!(body["bookmarks"], json!([]));
}

#[tokio::test]
async fn test_rating_replace_and_validation() {
    let server = setup_test_server().await;

    let body: Value = server.get("/api/posts/p1/rating").await.json();
    assert_eq!(body, json!({ "postId": "p1", "rating": null }));

    server
        .post("/api/posts/p1/rating")
        .json(&json!({ "rating": 3 }))
        .await
        .assert_status_ok();
    let response = server
        .post("/api/posts/p1/rating")
        .json(&json!({ "rating": 5 }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["postId"], "p1");
    assert_eq!(body["rating"], 5);

    let body: Value = server.get("/api/posts/p1/rating").await.json();
    assert_eq!(body["rating"], 5);

    let response = server
        .post("/api/posts/p1/rating")
        .json(&json!({ "rating": 9 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_rating_numbers_are_bad_requests() {
    let server = setup_test_server().await;

    for rating in [json!(-1), json!(300), json!(3.5), json!(0)] {
        let response = server
            .post("/api/posts/p1/rating")
            .json(&json!({ "rating": rating }))
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "rating {}",
            rating
        );
    }

    let body: Value = server.get("/api/posts/p1/rating").await.json();
    assert_eq!(body["rating"], Value::Null);
}

#[tokio::test]
async fn test_bookmarked_posts_skip_unknown_slugs() {
    let server = setup_test_server().await;

    let body: Value = server.get("/api/posts/bookmarked").await.json();
    assert_eq!(body, json!([]));

    server.put("/api/bookmarks/optimizing-react-applications").await.assert_status_ok();
    server.put("/api/bookmarks/removed-post").await.assert_status_ok();
    server.put("/api/bookmarks/ai-chat-assistant").await.assert_status_ok();

    let response = server.get("/api/posts/bookmarked").await;
    response.assert_status_ok();
    let posts: Value = response.json();
    let slugs: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["ai-chat-assistant", "optimizing-react-applications"]);
    assert_eq!(posts[0]["title"], "Building an AI-Powered Chat Assistant");

    // The stale slug stays in the bookmark set itself.
    let body: Value = server.get("/api/bookmarks").await.json();
    assert_eq!(body["bookmarks"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_comment_lifecycle() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/posts/a/comments")
        .json(&json!({ "name": "Ada", "content": "Great post" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let comment: Value = response.json();
    assert_eq!(comment["postId"], "a");
    let id = comment["id"].as_str().unwrap().to_string();

    server
        .post("/api/posts/b/comments")
        .json(&json!({ "name": "Bob", "content": "Other post" }))
        .await;

    let comments: Value = server.get("/api/posts/a/comments").await.json();
    assert_eq!(comments.as_array().unwrap().len(), 1);
    let comments: Value = server.get("/api/posts/c/comments").await.json();
    assert!(comments.as_array().unwrap().is_empty());

    let response = server.delete(&format!("/api/comments/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.delete(&format!("/api/comments/{}", id)).await;
    response.assert_status_not_found();

    let comments: Value = server.get("/api/posts/b/comments").await.json();
    assert_eq!(comments.as_array().unwrap().len(), 1);

    let response = server
        .post("/api/posts/a/comments")
        .json(&json!({ "name": "", "content": "anonymous" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preferences_survive_app_restart() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.chat.typing_delay_ms = 0;
    config.storage = StorageConfig::File(FileStorageConfig {
        directory: temp_dir.path().join("data"),
    });

    {
        let server = TestServer::new(create_app(config.clone()).await.unwrap()).unwrap();
        server.put("/api/bookmarks/first").await.assert_status_ok();
        server
            .post("/api/posts/first/rating")
            .json(&json!({ "rating": 4 }))
            .await
            .assert_status_ok();
    }

    assert!(temp_dir.path().join("data/bookmarks-storage.json").exists());
    assert!(temp_dir.path().join("data/blog-ratings.json").exists());

    let server = TestServer::new(create_app(config).await.unwrap()).unwrap();
    let body: Value = server.get("/api/bookmarks").await.json();
    assert_eq!(body["bookmarks"], json!(["first"]));
    let body: Value = server.get("/api/posts/first/rating").await.json();
    assert_eq!(body["rating"], 4);
}

#[tokio::test]
async fn test_create_app_rejects_missing_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage = StorageConfig::Memory;
    config.catalog.path = Some(temp_dir.path().join("missing.toml"));

    assert!(create_app(config).await.is_err());
}
