use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::CourseError;
use crate::retry::RetryPolicy;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImageSearchConfig {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    pub completion: CompletionConfig,
    pub image_search: ImageSearchConfig,
    pub retry_attempts: u32,
    pub retry_delay_secs: u64,
    pub explanation_concurrency: usize,
}

impl Config {
    /// Builds a config from a variable lookup, applying defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, CourseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_KEY").unwrap_or_default();
        if api_key.is_empty() {
            log::warn!("OPENAI_KEY is not set, completion requests will be unauthorized");
        }
        let search_key = lookup("SERPAPI_KEY").unwrap_or_default();
        if search_key.is_empty() {
            log::warn!("SERPAPI_KEY is not set, image lookups will find nothing");
        }

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>()?,
            None => consts::DEFAULT_PORT,
        };
        let retry_attempts = match lookup("RETRY_ATTEMPTS") {
            Some(attempts) => attempts.trim().parse::<u32>()?,
            None => consts::DEFAULT_RETRY_ATTEMPTS,
        };
        let retry_delay_secs = match lookup("RETRY_DELAY_SECS") {
            Some(delay) => delay.trim().parse::<u64>()?,
            None => consts::DEFAULT_RETRY_DELAY_SECS,
        };
        let explanation_concurrency = match lookup("EXPLANATION_CONCURRENCY") {
            Some(limit) => limit.trim().parse::<usize>()?,
            None => consts::DEFAULT_EXPLANATION_CONCURRENCY,
        };

        if retry_attempts == 0 {
            return Err(CourseError::ConfigError(
                "RETRY_ATTEMPTS must be at least 1".to_string(),
            ));
        }
        if explanation_concurrency == 0 {
            return Err(CourseError::ConfigError(
                "EXPLANATION_CONCURRENCY must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            port,
            completion: CompletionConfig {
                api_url: lookup("OPENAI_API_URL")
                    .unwrap_or(consts::DEFAULT_COMPLETION_API_URL.to_string()),
                api_key,
                model: lookup("OPENAI_MODEL").unwrap_or(consts::DEFAULT_MODEL.to_string()),
            },
            image_search: ImageSearchConfig {
                api_url: lookup("SERPAPI_URL")
                    .unwrap_or(consts::DEFAULT_IMAGE_SEARCH_API_URL.to_string()),
                api_key: search_key,
            },
            retry_attempts,
            retry_delay_secs,
            explanation_concurrency,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(
            self.retry_attempts,
            Duration::from_secs(self.retry_delay_secs),
        )
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, CourseError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, CourseError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }
}

pub fn load_config() -> Result<Config, CourseError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
