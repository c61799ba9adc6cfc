use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::song::{SearchRequest, SuggestionsResponse};
use crate::state::AppState;

/// POST /search. Forwards the free-text query to the model service and
/// returns its suggestions untouched.
pub async fn search_route(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Response {
    let query = match payload.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => {
            return Json(SuggestionsResponse {
                suggestions: Vec::new(),
            })
            .into_response();
        }
    };

    match state.gateway.search_songs(&query).await {
        Ok(suggestions) => Json(SuggestionsResponse { suggestions }).into_response(),
        Err(e) => {
            error!("Model service search failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Recommendation service unavailable"})),
            )
                .into_response()
        }
    }
}
