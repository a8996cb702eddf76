use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Write a capture file into `dir` and return its path.
pub fn write_capture(dir: &Path, name: &str, record: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(record).unwrap()).unwrap();
    path
}

pub fn openai_success() -> Value {
    json!({
        "id": "exc_success",
        "provider": "OpenAI",
        "request": {
            "body": {
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "What is the capital of France?"}]
            }
        },
        "response": {
            "status": 200,
            "body": {
                "choices": [{"message": {"role": "assistant", "content": "Paris."}}],
                "usage": {"prompt_tokens": 9, "completion_tokens": 12}
            }
        },
        "calculatedFields": {"totalTokens": 21, "totalCost": 0.0031, "duration": 834}
    })
}

pub fn openai_failure() -> Value {
    json!({
        "id": "exc_failure",
        "provider": "OpenAI",
        "request": {
            "body": {"model": "gpt-4", "messages": []}
        },
        "response": {
            "status": 500,
            "body": {"error": {"message": "The server is overloaded"}}
        },
        "calculatedFields": {"duration": 1203}
    })
}

pub fn anthropic_record() -> Value {
    json!({
        "id": "exc_other",
        "provider": "Anthropic",
        "request": {"body": {"model": "claude-3-opus", "max_tokens": 64}},
        "response": {"status": 200, "body": {"content": []}},
        "calculatedFields": {"totalCost": 0.012}
    })
}
