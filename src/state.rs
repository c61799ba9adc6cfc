use std::sync::Arc;

use crate::config::Config;
use crate::controllers::{ModelController, RecommendationGateway, VideoLookup, YoutubeController};

/// Shared per-process state handed to every route. Both collaborators are
/// trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn RecommendationGateway>,
    pub videos: Arc<dyn VideoLookup>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            gateway: Arc::new(ModelController::new(config.model_service_url.clone())),
            videos: Arc::new(YoutubeController::new(
                config.youtube_api_key.clone(),
                config.youtube_api_url.clone(),
            )),
        }
    }
}
