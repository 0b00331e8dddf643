use std::collections::{BTreeMap, HashMap};

use serde::{self, Deserialize, Serialize};
use serde_json::Value;

use crate::consts;

/// A question as the front end sends it back. Everything besides the key
/// fields stays as the completion service wrote it, so an exam this service
/// generated always deserializes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    /// Assigned at exam generation; older clients may omit it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// `selection`, `fill-in-the-blank` or `entry` when the model follows the prompt.
    #[serde(rename = "type", skip_serializing_if = "Value::is_null", default)]
    pub kind: Value,
    pub question: String,
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub options: Value,
    #[serde(default)]
    pub correct_answer: Value,
}

impl Question {
    /// Identity used for answers, results and explanations.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.question)
    }

    /// Exact JSON equality; a missing or null answer is never correct.
    pub fn is_answered_correctly(&self, answers: &HashMap<String, Value>) -> bool {
        answers
            .get(self.key())
            .is_some_and(|answer| !answer.is_null() && *answer == self.correct_answer)
    }

    pub fn correct_answer_text(&self) -> String {
        match &self.correct_answer {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExamSubmission {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: HashMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvaluationResult {
    pub results: BTreeMap<String, bool>,
    pub score: f64,
    pub total: usize,
    pub explanations: BTreeMap<String, String>,
}

/// Per-question correctness, keyed by question key. Duplicate keys collide and
/// the last question wins.
pub fn grade(submission: &ExamSubmission) -> BTreeMap<String, bool> {
    submission
        .questions
        .iter()
        .map(|q| (q.key().to_string(), q.is_answered_correctly(&submission.answers)))
        .collect()
}

/// Correct count rescaled to five points, rounded to one decimal.
pub fn scaled_score(results: &BTreeMap<String, bool>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let correct = results.values().filter(|correct| **correct).count();
    let scaled = correct as f64 / total as f64 * consts::EXAM_SCORE_SCALE;
    (scaled * 10.0).round() / 10.0
}

/// Gives every question object in a generated exam an `id` (`q1`, `q2`, ...)
/// unless it already has one. Anything that is not an array passes through.
pub fn assign_question_ids(mut exam: Value) -> Value {
    if let Value::Array(questions) = &mut exam {
        for (index, question) in questions.iter_mut().enumerate() {
            if let Value::Object(fields) = question {
                fields
                    .entry("id")
                    .or_insert_with(|| Value::String(format!("q{}", index + 1)));
            }
        }
    }
    exam
}
