use crate::controllers::RootController;
use crate::state::AppState;
use axum::extract::State;

pub async fn root_route(State(_state): State<AppState>) -> impl axum::response::IntoResponse {
    RootController::root().await
}

pub async fn health_check_route(State(_state): State<AppState>) -> impl axum::response::IntoResponse {
    RootController::health_check().await
}
