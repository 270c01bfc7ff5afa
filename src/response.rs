//! Response bodies for write operations.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Created {
    pub id: i64,
}

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

pub fn created(id: i64) -> (StatusCode, Json<Created>) {
    (StatusCode::CREATED, Json(Created { id }))
}

pub fn message(message: String) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { message }))
}
