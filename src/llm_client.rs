use async_trait::async_trait;

use crate::config::CompletionConfig;
use crate::errors::CourseError;
use crate::models::request;
use crate::models::response::ChatCompletion;

/// One delivery attempt to the completion service. Retrying is layered on top.
#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, CourseError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &CompletionConfig) -> Self {
        Self::new(client, &config.api_url, &config.api_key)
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, CourseError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CourseError::ApiError(format!(
                "error: status {status}, text {text}"
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
