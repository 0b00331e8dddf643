use crate::models::response::{ChatCompletion, Choice, ResponseMessage};
use crate::models::{FinishReason, Role, Usage};

pub(crate) fn completion_body(content: &str) -> ChatCompletion {
    ChatCompletion {
        id: "chatcmpl-test".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Some(Role::Assistant),
                content: Some(content.to_string()),
            },
            finish_reason: Some(FinishReason::Stop),
        }],
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 20,
            total_tokens: 30,
        }),
    }
}
