//! JSON adapter for the browser game host.
//!
//! The games render questions from plain JSON objects; this module builds
//! those shapes from engine types. Pure formatting — no I/O, no host calls.

use serde_json::{json, Value};

use crate::fact_engine::models::{FactQuestion, Operation, CATALOGUE};
use crate::fact_engine::selector::QuestionSelector;

fn operation_str(op: Operation) -> &'static str {
    match op {
        Operation::Addition => "addition",
        Operation::Subtraction => "subtraction",
    }
}

/// Build the question payload the host renders:
/// prompt text, operand list, answer, and category metadata.
pub fn to_host_question(question: &FactQuestion) -> Value {
    let category = question.category();
    json!({
        "key": question.key(),
        "prompt": question.prompt(),
        "operands": question.operands(),
        "answer": question.answer(),
        "category": category.key(),
        "category_label": category.label(),
        "operation": operation_str(category.operation()),
    })
}

/// Build the progress payload for scoreboards and progress bars.
pub fn to_host_progress(selector: &QuestionSelector) -> Value {
    json!({
        "answered": selector.total_questions_answered(),
        "correct": selector.total_correct(),
        "total": selector.total_questions(),
        "retry_pending": selector.retry_pending(),
    })
}

/// Build the topic menu: every category with its key, label, and whether it
/// can only supply finitely many unique questions.
pub fn to_host_topic_menu() -> Value {
    let topics: Vec<Value> = CATALOGUE
        .iter()
        .map(|d| {
            json!({
                "key": d.key.key(),
                "label": d.label,
                "limited": d.limited,
            })
        })
        .collect();
    Value::Array(topics)
}
