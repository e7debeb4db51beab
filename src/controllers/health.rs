use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "InfoFlow News API";
pub const SERVICE_VERSION: &str = "1.0.0";

/// GET /news/health - Liveness probe, no side effects
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": SERVICE_NAME,
            "version": SERVICE_VERSION,
        })),
    )
}
