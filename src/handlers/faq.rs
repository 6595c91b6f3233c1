//! FAQ handlers: create, list, read, update, delete, list by tag.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::models::FaqInput;
use crate::response::{acknowledged, created, ok};
use crate::service::FaqService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::Value;

const RESOURCE: &str = "faq";

pub async fn create_faq(
    State(state): State<AppState>,
    Payload(input): Payload<FaqInput>,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::create(&state.pool, &input).await?;
    Ok(created(faq))
}

pub async fn list_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faqs = FaqService::list(&state.pool).await?;
    Ok(ok(faqs))
}

pub async fn read_faq(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    let faq = FaqService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(ok(faq))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Payload<Value>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    // A missing record wins over a bad body.
    let body = match payload {
        Ok(Payload(body)) => body,
        Err(rejection) => {
            if FaqService::read(&state.pool, id).await?.is_none() {
                return Err(AppError::NotFound(RESOURCE.into()));
            }
            return Err(rejection);
        }
    };
    let faq = FaqService::update(&state.pool, id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(RESOURCE.into()))?;
    Ok(ok(faq))
}

pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    if !FaqService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(RESOURCE.into()));
    }
    Ok(acknowledged())
}

/// FAQs carrying the tag named in the path; 404 when none match.
pub async fn list_faqs_by_tag(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let faqs = FaqService::list_by_tag(&state.pool, &tag_name).await?;
    if faqs.is_empty() {
        return Err(AppError::NotFound(format!("faqs with tag '{tag_name}'")));
    }
    Ok(ok(faqs))
}
