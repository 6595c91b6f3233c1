//! Response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
}

/// `{"data": true}` acknowledgment returned by deletes.
pub fn acknowledged() -> (StatusCode, Json<SuccessOne<bool>>) {
    (StatusCode::OK, Json(SuccessOne { data: true }))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
