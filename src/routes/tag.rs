use crate::handlers::{create_tag, delete_tag, list_tags, update_tag};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

/// No single-tag read: GET /tags/:id is not routed.
pub fn tag_routes(state: AppState) -> Router {
    Router::new()
        .route("/tags", get(list_tags).post(create_tag))
        .route("/tags/:id", put(update_tag).delete(delete_tag))
        .with_state(state)
}
