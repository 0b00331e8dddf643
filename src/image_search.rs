use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ImageSearchConfig;
use crate::errors::CourseError;

/// Best-effort image lookup: any failure or an empty result is `None`.
#[async_trait]
pub trait ImageSearchTrait: Send + Sync {
    async fn search_image(&self, query: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    #[serde(default)]
    original: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    images_results: Vec<ImageResult>,
}

/// SerpApi Google Images client.
pub struct ImageSearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ImageSearchClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &ImageSearchConfig) -> Self {
        Self::new(client, &config.api_url, &config.api_key)
    }

    async fn first_original(&self, query: &str) -> Result<Option<String>, CourseError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, "/search"))
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("tbm", "isch"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(CourseError::ApiError(format!(
                "image search status {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let results: SearchResponse = serde_json::from_slice(&body)?;

        Ok(results
            .images_results
            .into_iter()
            .next()
            .and_then(|image| image.original))
    }
}

#[async_trait]
impl ImageSearchTrait for ImageSearchClient {
    async fn search_image(&self, query: &str) -> Option<String> {
        match self.first_original(query).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("image search error for {:?}: {}", query, e);
                None
            }
        }
    }
}
