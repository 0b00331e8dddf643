pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_SEARCH_API_URL: &str = "https://serpapi.com";

pub const DEFAULT_RETRY_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
pub const DEFAULT_EXPLANATION_CONCURRENCY: usize = 4;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub(crate) const OUTLINE_MAX_TOKENS: u32 = 4000;
pub(crate) const CONTENT_MAX_TOKENS: u32 = 4000;
pub(crate) const DEEPER_CONTENT_MAX_TOKENS: u32 = 8000;
pub(crate) const EXAM_MAX_TOKENS: u32 = 2000;
pub(crate) const EXPLANATION_MAX_TOKENS: u32 = 500;

pub const IMAGE_MARKER_PREFIX: &str = "[IMAGE:";
pub const IMAGE_MARKER_SUFFIX: char = ']';

pub const EXPLANATION_FAILED: &str = "Failed to generate explanation.";
pub const OUTLINE_ERROR_MESSAGE: &str = "Failed to decode JSON response from OpenAI";
pub const EXAM_ERROR_MESSAGE: &str = "Failed to decode JSON response from OpenAI";
pub const CONTENT_ERROR_MESSAGE: &str = "Failed to generate content from OpenAI";
pub const DEEPER_CONTENT_ERROR_MESSAGE: &str = "Failed to generate detailed content from OpenAI";

pub(crate) const EXAM_SCORE_SCALE: f64 = 5.0;
