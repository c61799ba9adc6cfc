use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        (StatusCode::OK, "AI Music Backend Running")
    }

    pub async fn health_check() -> impl IntoResponse {
        (StatusCode::OK, Json(json!({"status": "ok"})))
    }
}
