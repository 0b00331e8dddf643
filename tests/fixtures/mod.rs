#![allow(dead_code)]

use serde_json::{Value, json};

pub fn completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 80, "total_tokens": 90}
    })
}

pub fn sample_outline() -> Value {
    json!({
        "Getting Started": [
            "Installing the toolchain",
            "Hello, world",
            "Cargo basics",
            "Editors and tooling",
            "Reading compiler errors"
        ],
        "Ownership": [
            "Moves",
            "Borrowing",
            "Lifetimes",
            "Slices",
            "Smart pointers",
            "Interior mutability"
        ]
    })
}

pub fn sample_exam() -> Value {
    json!([
        {
            "type": "selection",
            "question": "Which keyword declares a mutable binding?",
            "options": ["let mut", "var", "mut let", "const"],
            "correct_answer": "let mut"
        },
        {
            "type": "fill-in-the-blank",
            "question": "A reference that allows mutation is written &__blank__ T.",
            "correct_answer": "mut"
        },
        {
            "type": "entry",
            "question": "What tool builds Rust projects?",
            "correct_answer": "cargo"
        }
    ])
}

pub fn image_results(urls: &[&str]) -> Value {
    let results: Vec<Value> = urls
        .iter()
        .enumerate()
        .map(|(position, url)| {
            json!({
                "position": position + 1,
                "thumbnail": format!("{}?thumb", url),
                "original": url
            })
        })
        .collect();

    json!({"search_metadata": {"status": "Success"}, "images_results": results})
}
