//! Tag handlers: create, list, update, delete.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::models::TagInput;
use crate::response::{acknowledged, created, ok};
use crate::service::TagService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;

const RESOURCE: &str = "tag";

pub async fn create_tag(
    State(state): State<AppState>,
    Payload(input): Payload<TagInput>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::create(&state.pool, &input).await?;
    Ok(created(tag))
}

pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::list(&state.pool).await?;
    Ok(ok(tags))
}

pub async fn update_tag(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Payload<Value>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    // A missing record wins over a bad body.
    let body = match payload {
        Ok(Payload(body)) => body,
        Err(rejection) => {
            if TagService::read(&state.pool, id).await?.is_none() {
                return Err(AppError::NotFound(RESOURCE.into()));
            }
            return Err(rejection);
        }
    };
    let tag = TagService::update(&state.pool, id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(ok(tag))
}

pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    if !TagService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(RESOURCE.into()));
    }
    Ok(acknowledged())
}

#[cfg(test)]
mod tests {
    use crate::models::Tag;
    use crate::test_utils::{create_test_app, create_test_tag};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn create_list_delete_scenario() {
        let (server, _pool) = create_test_app().await;

        let response = server
            .post("/tags")
            .json(&json!({"tag_name": "billing", "category": "finance"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let tag: Tag = response.json();
        assert!(tag.id > 0);
        assert_eq!(tag.tag_name, "billing");
        assert_eq!(tag.category, "finance");

        let response = server.get("/tags").await;
        response.assert_status_ok();
        let tags: Vec<Tag> = response.json();
        assert_eq!(tags, vec![tag.clone()]);

        let response = server.delete(&format!("/tags/{}", tag.id)).await;
        response.assert_status_ok();
        response.assert_json(&json!({"data": true}));

        let tags: Vec<Tag> = server.get("/tags").await.json();
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_ok() {
        let (server, _pool) = create_test_app().await;
        let response = server.get("/tags").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn tag_names_are_not_unique() {
        let (server, _pool) = create_test_app().await;
        let first = create_test_tag(&server, "billing", "finance").await;
        let second = create_test_tag(&server, "billing", "finance").await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn update_merges_onto_loaded_record() {
        let (server, _pool) = create_test_app().await;
        let tag = create_test_tag(&server, "billing", "finance").await;

        let response = server
            .put(&format!("/tags/{}", tag.id))
            .json(&json!({"tag_name": "invoices"}))
            .await;
        response.assert_status_ok();
        let updated: Tag = response.json();
        assert_eq!(updated.id, tag.id);
        assert_eq!(updated.tag_name, "invoices");
        assert_eq!(updated.category, "finance");
        assert_eq!(updated.created_at, tag.created_at);

        let updated: Tag = server
            .put(&format!("/tags/{}", tag.id))
            .json(&json!({"category": ""}))
            .await
            .json();
        assert_eq!(updated.tag_name, "invoices");
        assert_eq!(updated.category, "");
    }

    #[tokio::test]
    async fn unknown_or_deleted_id_is_not_found() {
        let (server, _pool) = create_test_app().await;
        server
            .put("/tags/5")
            .json(&json!({"tag_name": "x"}))
            .await
            .assert_status_not_found();
        server.delete("/tags/5").await.assert_status_not_found();

        let tag = create_test_tag(&server, "billing", "finance").await;
        server.delete(&format!("/tags/{}", tag.id)).await.assert_status_ok();
        server
            .put(&format!("/tags/{}", tag.id))
            .json(&json!({"tag_name": "x"}))
            .await
            .assert_status_not_found();
        server.delete(&format!("/tags/{}", tag.id)).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request_and_store_unchanged() {
        let (server, _pool) = create_test_app().await;
        let response = server
            .post("/tags")
            .content_type("application/json")
            .bytes("{tag_name: billing}".into())
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "bad_request");

        server
            .post("/tags")
            .json(&json!(["billing"]))
            .await
            .assert_status_bad_request();
        let tags: Vec<Tag> = server.get("/tags").await.json();
        assert!(tags.is_empty());

        let tag = create_test_tag(&server, "billing", "finance").await;
        server
            .put(&format!("/tags/{}", tag.id))
            .json(&json!({"category": false}))
            .await
            .assert_status_bad_request();
        let response = server
            .put(&format!("/tags/{}", tag.id))
            .content_type("application/json")
            .bytes("{\"category\": ".into())
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "invalid request payload");
        let tags: Vec<Tag> = server.get("/tags").await.json();
        assert_eq!(tags, vec![tag]);
    }

    #[tokio::test]
    async fn store_failure_is_internal_error() {
        let (server, pool) = create_test_app().await;
        let tag = create_test_tag(&server, "billing", "finance").await;
        pool.close().await;

        server.get("/tags").await.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .post("/tags")
            .json(&json!({"tag_name": "account", "category": "support"}))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .put(&format!("/tags/{}", tag.id))
            .json(&json!({"category": "ops"}))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server
            .delete(&format!("/tags/{}", tag.id))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
