use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::song::{RecommendRequest, RecommendationResult};
use crate::state::AppState;

/// POST /recommend. Asks the model service for similar songs, then attaches
/// a YouTube video id to the match and every recommendation. A missing or
/// blank song is not an error: the client gets the empty shape back.
pub async fn recommend_route(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Response {
    let song = match payload.song.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => return Json(RecommendationResult::empty()).into_response(),
    };

    let mut result = match state.gateway.recommend(&song).await {
        Ok(r) => r,
        Err(e) => {
            error!("Model service recommend failed: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Recommendation service unavailable"})),
            )
                .into_response();
        }
    };

    // Sequential lookups are fine here: recommendation lists are short and
    // each lookup is independent.
    if let Some(matched) = result.matched_song.as_mut() {
        matched.youtube_video_id = state.videos.find_video(&matched.title, &matched.artist).await;
    }
    for rec in result.recommendations.iter_mut() {
        rec.youtube_video_id = state.videos.find_video(&rec.title, &rec.artist).await;
    }

    Json(result).into_response()
}
