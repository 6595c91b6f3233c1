//! Shared helpers for handler tests.

use crate::config::ServerConfig;
use crate::migration::apply_migrations;
use crate::models::{Faq, Tag};
use crate::routes::app;
use crate::state::AppState;
use crate::store::connect_in_memory;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

/// Fresh in-memory store with the schema applied, served by the full router.
pub async fn create_test_app() -> (TestServer, SqlitePool) {
    let pool = connect_in_memory().await.expect("in-memory sqlite");
    apply_migrations(&pool).await.expect("migrations");
    let router = app(AppState::new(pool.clone()), &ServerConfig::default());
    let server = TestServer::new(router).expect("test server");
    (server, pool)
}

pub async fn create_test_tag(server: &TestServer, tag_name: &str, category: &str) -> Tag {
    let response = server
        .post("/tags")
        .json(&json!({"tag_name": tag_name, "category": category}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

pub async fn create_test_faq(server: &TestServer, question: &str, answer: &str, tag_ids: &[i64]) -> Faq {
    let tags: Vec<_> = tag_ids.iter().map(|id| json!({"id": id})).collect();
    let response = server
        .post("/faqs")
        .json(&json!({"question": question, "answer": answer, "tags": tags}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}
