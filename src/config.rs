// Environment configuration, read once at startup.
use std::env;
use tracing::{info, warn};

const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const DEFAULT_MODEL_SERVICE_URL: &str = "http://localhost:8001";
const DEFAULT_PORT: &str = "8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
    pub model_service_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let youtube_api_key = non_blank(env::var("YOUTUBE_API_KEY").ok());

        // Log presence only, never the key itself
        if youtube_api_key.is_some() {
            info!("YouTube API key loaded");
        } else {
            warn!("YouTube API key missing, video enrichment disabled");
        }

        Config {
            port: env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
            youtube_api_key,
            youtube_api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_URL.to_string()),
            model_service_url: env::var("MODEL_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_MODEL_SERVICE_URL.to_string()),
        }
    }
}

// An empty YOUTUBE_API_KEY counts as unset
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("".to_string())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(
            non_blank(Some("abc123".to_string())),
            Some("abc123".to_string())
        );
    }
}
