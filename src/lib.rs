//! FAQ knowledge-base REST backend: FAQs, categorized tags and their association, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::app;
pub use service::{FaqService, TagService};
pub use state::AppState;
pub use store::connect;
