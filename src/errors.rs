use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CourseError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Malformed outline: {0}")]
    MalformedOutline(String),
    #[error("Failed to connect after multiple attempts. ({attempts} attempts)")]
    Unreachable { attempts: u32 },
}

impl From<reqwest::Error> for CourseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            CourseError::NetworkError(err.to_string())
        } else {
            CourseError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(err: serde_json::Error) -> Self {
        CourseError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for CourseError {
    fn from(err: std::num::ParseIntError) -> Self {
        CourseError::ConfigError(err.to_string())
    }
}
