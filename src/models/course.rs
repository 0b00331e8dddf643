use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CourseError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutlineRequest {
    pub prompt: String,
}

/// Body shared by `/generate-content`, `/dig-deeper` and `/generate-exam`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubchapterRequest {
    pub chapter_name: String,
    pub subchapter_name: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Chapter name to subchapter names, kept as the completion service wrote it,
/// chapter order included.
pub type ChapterOutline = Map<String, Value>;

pub fn parse_outline(text: &str) -> Result<ChapterOutline, CourseError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CourseError::MalformedOutline(format!("not valid JSON: {}", e)))?;

    let Value::Object(outline) = value else {
        return Err(CourseError::MalformedOutline(
            "outline is not a JSON object".to_string(),
        ));
    };

    for (chapter, subchapters) in &outline {
        if !subchapters.is_array() {
            return Err(CourseError::MalformedOutline(format!(
                "Subchapters for {} are not in a list format",
                chapter
            )));
        }
    }

    Ok(outline)
}
