use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct RecommendRequest {
    pub song: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// A song as returned by the model service, with the YouTube video id
/// attached after enrichment. The id is always serialized, null when the
/// lookup found nothing.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SongMatch {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub youtube_video_id: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct RecommendationResult {
    pub matched_song: Option<SongMatch>,
    #[serde(default)]
    pub recommendations: Vec<SongMatch>,
}

impl RecommendationResult {
    /// Shape returned when no song was provided: not an error, just empty.
    pub fn empty() -> Self {
        RecommendationResult {
            matched_song: None,
            recommendations: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_serializes_as_null_when_absent() {
        let song = SongMatch {
            title: "Yesterday".to_string(),
            artist: "The Beatles".to_string(),
            youtube_video_id: None,
        };
        let json = serde_json::to_value(&song).unwrap();
        assert!(json.get("youtube_video_id").unwrap().is_null());
    }

    #[test]
    fn gateway_payload_without_video_id_deserializes() {
        let json = r#"{
            "matched_song": {"title": "Yesterday", "artist": "The Beatles"},
            "recommendations": [{"title": "Let It Be", "artist": "The Beatles"}]
        }"#;
        let result: RecommendationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.matched_song.unwrap().title, "Yesterday");
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].youtube_video_id.is_none());
    }

    #[test]
    fn empty_result_has_no_match_and_no_recommendations() {
        let empty = RecommendationResult::empty();
        assert!(empty.matched_song.is_none());
        assert!(empty.recommendations.is_empty());
    }
}
