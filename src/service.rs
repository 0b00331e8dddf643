use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use serde_json::Value;

use crate::assembler;
use crate::config::Config;
use crate::consts;
use crate::errors::CourseError;
use crate::image_search::{ImageSearchClient, ImageSearchTrait};
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::models::course::{self, ChapterOutline};
use crate::models::exam::{self, EvaluationResult, ExamSubmission};
use crate::models::request;
use crate::prompts::{self, Prompt};
use crate::retry::RetryPolicy;

#[derive(Clone)]
pub struct CourseService {
    llm: Arc<dyn LLMClientTrait>,
    images: Arc<dyn ImageSearchTrait>,
    model: String,
    retry: RetryPolicy,
    explanation_concurrency: usize,
}

impl CourseService {
    pub fn new(
        llm: Arc<dyn LLMClientTrait>,
        images: Arc<dyn ImageSearchTrait>,
        model: &str,
        retry: RetryPolicy,
        explanation_concurrency: usize,
    ) -> Self {
        Self {
            llm,
            images,
            model: model.to_string(),
            retry,
            explanation_concurrency: explanation_concurrency.max(1),
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        let llm = LLMClient::from_config(http_client.clone(), &config.completion);
        let images = ImageSearchClient::from_config(http_client, &config.image_search);
        Self::new(
            Arc::new(llm),
            Arc::new(images),
            &config.completion.model,
            config.retry_policy(),
            config.explanation_concurrency,
        )
    }

    /// Sends the prompt with retries and returns the first choice's text.
    pub async fn complete(&self, prompt: Prompt) -> Result<String, CourseError> {
        let request = request::ChatCompletionCreate {
            model: self.model.clone(),
            messages: prompt.messages,
            max_tokens: Some(prompt.max_tokens),
        };

        let llm = &self.llm;
        let request = &request;
        let completion = self
            .retry
            .run(move |_| llm.request_chat_completion(request))
            .await?;

        Ok(completion.first_content()?.to_string())
    }

    pub async fn generate_chapters(&self, topic: &str) -> Result<ChapterOutline, CourseError> {
        let text = self.complete(prompts::outline(topic)).await?;
        log::debug!("chapters response: {}", text);

        course::parse_outline(&text)
    }

    pub async fn generate_content(
        &self,
        chapter: &str,
        subchapter: &str,
        topic: &str,
    ) -> Result<String, CourseError> {
        let text = self
            .complete(prompts::content(chapter, subchapter, topic))
            .await?;
        log::debug!("content response: {}", text);

        Ok(assembler::assemble_content(&text, self.images.as_ref()).await)
    }

    pub async fn dig_deeper(
        &self,
        chapter: &str,
        subchapter: &str,
        topic: &str,
    ) -> Result<String, CourseError> {
        let text = self
            .complete(prompts::deeper_content(chapter, subchapter, topic))
            .await?;
        log::debug!("detailed content response: {}", text);

        Ok(assembler::assemble_content(&text, self.images.as_ref()).await)
    }

    pub async fn generate_exam(
        &self,
        chapter: &str,
        subchapter: &str,
        topic: &str,
    ) -> Result<Value, CourseError> {
        let text = self
            .complete(prompts::exam(chapter, subchapter, topic))
            .await?;
        log::debug!("exam questions response: {}", text);

        let exam: Value = serde_json::from_str(&text)?;
        Ok(exam::assign_question_ids(exam))
    }

    /// Grades the submission and asks for one explanation per question. A
    /// failed explanation is replaced with a fixed message. Explanations are
    /// collected in question order, so a repeated key keeps the last
    /// question's explanation, matching `results`.
    pub async fn evaluate_exam(&self, submission: &ExamSubmission) -> EvaluationResult {
        let results = exam::grade(submission);
        let total = submission.questions.len();
        let score = exam::scaled_score(&results, total);

        let explanations = stream::iter(submission.questions.iter())
            .map(|question| async move {
                let prompt =
                    prompts::explanation(&question.question, &question.correct_answer_text());
                let explanation = match self.complete(prompt).await {
                    Ok(text) => text,
                    Err(e) => {
                        log::error!("explanation error for {:?}: {}", question.key(), e);
                        consts::EXPLANATION_FAILED.to_string()
                    }
                };
                (question.key().to_string(), explanation)
            })
            .buffered(self.explanation_concurrency)
            .collect::<Vec<_>>()
            .await;

        EvaluationResult {
            results,
            score,
            total,
            explanations: explanations.into_iter().collect(),
        }
    }
}
