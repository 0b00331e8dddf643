use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::helpers::completion_body;
use crate::errors::CourseError;
use crate::image_search::ImageSearchTrait;
use crate::llm_client::LLMClientTrait;
use crate::models::request;
use crate::models::response::ChatCompletion;

struct Rule {
    needle: String,
    result: Result<String, CourseError>,
    delay: Duration,
}

/// Completion client that replays queued results. Rules registered with
/// `respond_for` match on message content and take precedence over the queue.
pub(crate) struct ScriptedLLMClient {
    responses: Mutex<VecDeque<Result<String, CourseError>>>,
    rules: Mutex<Vec<Rule>>,
    calls: Mutex<Vec<request::ChatCompletionCreate>>,
    latency: Mutex<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedLLMClient {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            rules: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            latency: Mutex::new(Duration::ZERO),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    pub(crate) fn push_error(&self, error: CourseError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn respond_for(&self, needle: &str, result: Result<&str, CourseError>) {
        self.respond_after(needle, Duration::ZERO, result);
    }

    pub(crate) fn respond_after(
        &self,
        needle: &str,
        delay: Duration,
        result: Result<&str, CourseError>,
    ) {
        self.rules.lock().unwrap().push(Rule {
            needle: needle.to_string(),
            result: result.map(str::to_string),
            delay,
        });
    }

    /// Delay added to every call.
    pub(crate) fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = latency;
    }

    /// Highest number of calls seen running at the same time.
    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> Vec<request::ChatCompletionCreate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for ScriptedLLMClient {
    async fn request_chat_completion(
        &self,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, CourseError> {
        self.calls.lock().unwrap().push(request.clone());

        let matched = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|rule| {
                request
                    .messages
                    .iter()
                    .any(|m| m.content.contains(&rule.needle))
            })
            .map(|rule| (rule.result.clone(), rule.delay));

        let (result, delay) = match matched {
            Some(matched) => matched,
            None => {
                let queued = self.responses.lock().unwrap().pop_front();
                let result = queued.unwrap_or_else(|| {
                    Err(CourseError::NetworkError("no scripted response".to_string()))
                });
                (result, Duration::ZERO)
            }
        };

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        let latency = *self.latency.lock().unwrap();
        let wait = delay + latency;
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        result.map(|text| completion_body(&text))
    }
}

/// Image search answering from a fixed table and recording every query.
pub(crate) struct StaticImageSearch {
    urls: HashMap<String, String>,
    queries: Mutex<Vec<String>>,
}

impl StaticImageSearch {
    pub(crate) fn new(urls: &[(&str, &str)]) -> Self {
        Self {
            urls: urls
                .iter()
                .map(|(query, url)| (query.to_string(), url.to_string()))
                .collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(&[])
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearchTrait for StaticImageSearch {
    async fn search_image(&self, query: &str) -> Option<String> {
        self.queries.lock().unwrap().push(query.to_string());
        self.urls.get(query).cloned()
    }
}
