//! HTTP handlers for FAQs and tags.

pub mod faq;
pub mod tag;
pub use faq::*;
pub use tag::*;

use crate::error::AppError;

/// Path ids that are not integers cannot name a stored record.
fn parse_id(id_str: &str, resource: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(resource.to_string()))
}
