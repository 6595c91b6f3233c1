//! Route tables and the assembled application router.

pub mod common;
pub mod faq;
pub mod tag;

pub use common::common_routes;
pub use faq::faq_routes;
pub use tag::tag_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Every route, with request tracing, permissive CORS and the body size limit applied.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(faq_routes(state.clone()))
        .merge(tag_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
                .layer(CorsLayer::permissive()),
        )
}
