// YouTube Data API search client. Enrichment is best-effort: every failure
// (missing key, transport error, malformed body, zero results) surfaces as
// None, never as an error the caller has to handle.
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait VideoLookup: Send + Sync {
    async fn find_video(&self, title: &str, artist: &str) -> Option<String>;
}

pub struct YoutubeController {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

impl YoutubeController {
    pub fn new(api_key: Option<String>, url: String) -> Self {
        YoutubeController {
            api_key,
            url,
            client: reqwest::Client::new(),
        }
    }

    fn search_query(title: &str, artist: &str) -> String {
        format!("{} {} official song", title, artist)
    }
}

#[async_trait]
impl VideoLookup for YoutubeController {
    async fn find_video(&self, title: &str, artist: &str) -> Option<String> {
        // No key configured: skip the network call entirely
        let api_key = self.api_key.as_deref()?;

        let search_q = Self::search_query(title, artist);
        let full_url = format!(
            "{}?part=snippet&type=video&maxResults=1&q={}&key={}",
            self.url,
            urlencoding::encode(&search_q),
            urlencoding::encode(api_key)
        );

        let res = match self.client.get(&full_url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("YouTube search request failed: {}", e);
                return None;
            }
        };
        let data: serde_json::Value = match res.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("YouTube search returned malformed body: {}", e);
                return None;
            }
        };

        let video_id = first_video_id(&data);
        if video_id.is_none() {
            debug!("no YouTube result for '{}'", search_q);
        }
        video_id
    }
}

fn first_video_id(data: &serde_json::Value) -> Option<String> {
    data.get("items")?
        .get(0)?
        .get("id")?
        .get("videoId")?
        .as_str()
        .map(|id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_key_short_circuits_to_none() {
        // Unroutable URL: any network attempt would error loudly, but the
        // missing key must return before the request is even built.
        let controller = YoutubeController::new(None, "http://0.0.0.0:1".to_string());
        let video = controller.find_video("Yesterday", "The Beatles").await;
        assert_eq!(video, None);
    }

    #[tokio::test]
    async fn transport_error_is_swallowed() {
        let controller = YoutubeController::new(
            Some("test-key".to_string()),
            "http://127.0.0.1:1".to_string(),
        );
        let video = controller.find_video("Yesterday", "The Beatles").await;
        assert_eq!(video, None);
    }

    #[test]
    fn search_query_appends_qualifier() {
        assert_eq!(
            YoutubeController::search_query("Yesterday", "The Beatles"),
            "Yesterday The Beatles official song"
        );
    }

    #[test]
    fn first_video_id_reads_first_item() {
        let data = json!({
            "items": [
                {"id": {"videoId": "abc123"}},
                {"id": {"videoId": "ignored"}}
            ]
        });
        assert_eq!(first_video_id(&data), Some("abc123".to_string()));
    }

    #[test]
    fn first_video_id_handles_empty_and_malformed() {
        assert_eq!(first_video_id(&json!({"items": []})), None);
        assert_eq!(first_video_id(&json!({"error": {"code": 403}})), None);
        assert_eq!(first_video_id(&json!("not an object")), None);
        assert_eq!(first_video_id(&json!({"items": [{"id": {}}]})), None);
    }
}
