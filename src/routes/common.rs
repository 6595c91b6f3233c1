//! Liveness, readiness and build info.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

const SCHEMA_TABLES: i64 = 3;

/// The process is up; says nothing about the store.
async fn health() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

/// 200 once the store answers and the schema is in place, 503 otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    let check: Result<(i64,), sqlx::Error> = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('faqs', 'tags', 'faq_tags')",
    )
    .fetch_one(&state.pool)
    .await;
    let store = match check {
        Ok((SCHEMA_TABLES,)) => "ok",
        Ok((found,)) => {
            tracing::warn!(found, "store reachable but schema incomplete");
            "schema missing"
        }
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            "unreachable"
        }
    };
    let status = if store == "ok" { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    let label = if status.is_success() { "ok" } else { "unavailable" };
    (status, Json(json!({"status": label, "store": store}))).into_response()
}

async fn version() -> Response {
    Json(json!({"name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION")})).into_response()
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::common_routes;
    use crate::state::AppState;
    use crate::store::connect_in_memory;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn health_and_ready() {
        let (server, _pool) = create_test_app().await;
        server.get("/health").await.assert_json(&json!({"status": "ok"}));

        let response = server.get("/ready").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok", "store": "ok"}));
    }

    #[tokio::test]
    async fn ready_reports_closed_pool() {
        let (server, pool) = create_test_app().await;
        pool.close().await;
        let response = server.get("/ready").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        response.assert_json(&json!({"status": "unavailable", "store": "unreachable"}));
    }

    #[tokio::test]
    async fn ready_requires_schema() {
        let pool = connect_in_memory().await.unwrap();
        let server = TestServer::new(common_routes(AppState::new(pool))).unwrap();
        let response = server.get("/ready").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        response.assert_json(&json!({"status": "unavailable", "store": "schema missing"}));
    }

    #[tokio::test]
    async fn version_names_the_package() {
        let (server, _pool) = create_test_app().await;
        let body: serde_json::Value = server.get("/version").await.json();
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
