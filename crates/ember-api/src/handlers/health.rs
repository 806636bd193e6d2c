//! Health check handlers, one fixed response per HTTP method.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

fn healthy(method: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: format!("API is healthy and {method} method is working"),
    })
}

pub async fn get() -> Json<HealthResponse> {
    healthy("get")
}

pub async fn post() -> Json<HealthResponse> {
    healthy("post")
}

pub async fn put() -> Json<HealthResponse> {
    healthy("put")
}

pub async fn delete() -> Json<HealthResponse> {
    healthy("delete")
}

pub async fn patch() -> Json<HealthResponse> {
    healthy("patch")
}
