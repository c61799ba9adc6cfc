// Client for the external recommendation model service. The model owns all
// matching logic; this layer only forwards requests and parses responses.
// Unlike video enrichment, model failures are real errors and propagate.
use async_trait::async_trait;
use serde_json::json;

use crate::models::song::RecommendationResult;

#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn recommend(&self, song: &str) -> anyhow::Result<RecommendationResult>;
    async fn search_songs(&self, query: &str) -> anyhow::Result<Vec<String>>;
}

pub struct ModelController {
    base_url: String,
    client: reqwest::Client,
}

impl ModelController {
    pub fn new(base_url: String) -> Self {
        ModelController {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecommendationGateway for ModelController {
    async fn recommend(&self, song: &str) -> anyhow::Result<RecommendationResult> {
        let response = self
            .client
            .post(format!("{}/recommend", self.base_url))
            .json(&json!({ "song": song }))
            .send()
            .await?
            .error_for_status()?;
        let result = response.json::<RecommendationResult>().await?;
        Ok(result)
    }

    async fn search_songs(&self, query: &str) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&json!({ "query": query }))
            .send()
            .await?
            .error_for_status()?;
        let suggestions = response.json::<Vec<String>>().await?;
        Ok(suggestions)
    }
}
