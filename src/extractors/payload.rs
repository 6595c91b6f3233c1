//! JSON body extractor whose rejection is a 400 in the API error format.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like `Json<T>`, but malformed, mistyped or wrongly-labelled bodies all yield
/// `400 invalid request payload` instead of axum's 415/422 plain-text rejections.
/// Only a JSON object is accepted at the top level.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::debug!(error = %rejection.body_text(), "request payload over limit");
                return Err(AppError::PayloadTooLarge);
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request payload");
                return Err(AppError::invalid_payload());
            }
        };
        if !body.is_object() {
            tracing::debug!("rejected non-object request payload");
            return Err(AppError::invalid_payload());
        }
        serde_json::from_value(body).map(Payload).map_err(|e| {
            tracing::debug!(error = %e, "request payload does not fit the model");
            AppError::invalid_payload()
        })
    }
}
