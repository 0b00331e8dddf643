use crate::consts;
use crate::models::request::Message;

/// Messages plus output budget for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

const HELPFUL_ASSISTANT: &str = "You are a helpful assistant.";
const KNOWLEDGEABLE_ASSISTANT: &str = "You are a knowledgeable assistant.";

pub fn outline(topic: &str) -> Prompt {
    let instructions = format!(
        "Generate a list of chapters and subchapters for a course on {topic} in JSON format. \
         Do not include any explanation or code formatting. \
         Format it in this way: {{'chapter_name': ['subchapters']}}. \
         Please include between 5 and 10 subchapters per chapter. Use this format exactly."
    );

    Prompt {
        messages: vec![
            Message::system(instructions),
            Message::user("generate with 4 space indents"),
        ],
        max_tokens: consts::OUTLINE_MAX_TOKENS,
    }
}

pub fn content(chapter: &str, subchapter: &str, topic: &str) -> Prompt {
    let instructions = format!(
        "Generate the content for a subchapter in a course. \
         The chapter title is {chapter}. The title of the subchapter is {subchapter}. \
         The course is about {topic}. Please only include the requested data. \
         Format the content in HTML. Additionally, include suggestions for images where \
         appropriate by wrapping the suggestions in [IMAGE: ...]."
    );

    Prompt {
        messages: vec![
            Message::system(instructions),
            Message::user(
                "Do not include the chapter title, the subchapter title, or the course title \
                 in the data, only the chapter content.",
            ),
        ],
        max_tokens: consts::CONTENT_MAX_TOKENS,
    }
}

pub fn deeper_content(chapter: &str, subchapter: &str, topic: &str) -> Prompt {
    let request = format!(
        "Generate a more detailed and comprehensive content for the subchapter '{subchapter}' \
         in the chapter '{chapter}' of the course on '{topic}'.
Include:
1. Detailed explanations of key concepts
2. Examples and case studies
3. Step-by-step guides
4. Visual aids such as diagrams or images

Format the content in HTML and include suggestions for images where appropriate by \
wrapping the suggestions in [IMAGE: ...]."
    );

    Prompt {
        messages: vec![Message::system(HELPFUL_ASSISTANT), Message::user(request)],
        max_tokens: consts::DEEPER_CONTENT_MAX_TOKENS,
    }
}

pub fn exam(chapter: &str, subchapter: &str, topic: &str) -> Prompt {
    let request = format!(
        r#"Generate an exam for the subchapter '{subchapter}' in the chapter '{chapter}' of the course on '{topic}'.
Include three types of questions:
1. Selection problems (multiple-choice) - 5 questions
2. Fill-in-the-blank problems - 5 questions
3. Entry problems (short answer) - 5 questions

Format the response as a JSON array with the following structure:
[
    {{
        "type": "selection",
        "question": "question text",
        "options": ["option1", "option2", "option3", "option4"],
        "correct_answer": "option1"
    }},
    {{
        "type": "fill-in-the-blank",
        "question": "question text with __blank__",
        "correct_answer": "answer"
    }},
    {{
        "type": "entry",
        "question": "question text",
        "correct_answer": "answer"
    }}
]"#
    );

    Prompt {
        messages: vec![Message::system(HELPFUL_ASSISTANT), Message::user(request)],
        max_tokens: consts::EXAM_MAX_TOKENS,
    }
}

pub fn explanation(question: &str, correct_answer: &str) -> Prompt {
    let request = format!(
        "Explain the correct answer for the following question:\nQuestion: {question}\nCorrect Answer: {correct_answer}"
    );

    Prompt {
        messages: vec![Message::system(KNOWLEDGEABLE_ASSISTANT), Message::user(request)],
        max_tokens: consts::EXPLANATION_MAX_TOKENS,
    }
}
