use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::news::DateRange;

const GNEWS_BASE_URL: &str = "https://gnews.io/api/v4/search";

/// Default credential shipped in `.env.example`. Requests are never sent with
/// it; the client reports itself as disabled so the caller can fall back.
pub const PLACEHOLDER_API_KEY: &str = "your_gnews_api_key_here";

/// GNews caps `max` at 100 results per request.
const MAX_RESULTS_CAP: usize = 100;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("GNews credential is missing or the placeholder")]
    Disabled,

    #[error("GNews returned status {0}")]
    Status(u16),

    #[error("GNews request failed: {0}")]
    Transport(String),
}

/// One page of upstream search results. Missing string fields deserialize to
/// empty strings so downstream article shaping never sees nulls.
#[derive(Debug, Deserialize)]
pub struct ProviderPage {
    #[serde(rename = "totalArticles", default)]
    pub total_articles: i64,
    #[serde(default)]
    pub articles: Vec<ProviderArticle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(default)]
    pub source: ProviderSource,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderSource {
    #[serde(default)]
    pub name: String,
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        range: &DateRange,
        max_articles: usize,
    ) -> Result<ProviderPage, ProviderError>;
}

pub struct GNewsClient {
    api_key: String,
    http_client: reqwest::Client,
}

impl GNewsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NewsProvider for GNewsClient {
    async fn search(
        &self,
        query: &str,
        range: &DateRange,
        max_articles: usize,
    ) -> Result<ProviderPage, ProviderError> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(ProviderError::Disabled);
        }

        // Results pinned to Brazilian Portuguese, newest first.
        let params = [
            ("q", query.to_string()),
            ("lang", "pt".to_string()),
            ("country", "br".to_string()),
            ("max", max_articles.min(MAX_RESULTS_CAP).to_string()),
            ("from", range.from_param()),
            ("to", range.to_param()),
            ("sortby", "publishedAt".to_string()),
            ("apikey", self.api_key.clone()),
        ];

        let response = self
            .http_client
            .get(GNEWS_BASE_URL)
            .query(&params)
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        response
            .json::<ProviderPage>()
            .await
            .map_err(|e| ProviderError::Transport(format!("invalid response body: {}", e)))
    }
}
