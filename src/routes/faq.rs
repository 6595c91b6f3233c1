use crate::handlers::{create_faq, delete_faq, list_faqs, list_faqs_by_tag, read_faq, update_faq};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn faq_routes(state: AppState) -> Router {
    Router::new()
        .route("/faqs", get(list_faqs).post(create_faq))
        .route("/faqs/:id", get(read_faq).put(update_faq).delete(delete_faq))
        .route("/faqs_by_tag/:tag", get(list_faqs_by_tag))
        .with_state(state)
}
