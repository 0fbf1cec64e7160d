//! Flattening agent output into one answer string.

use crate::types::AgentState;
use serde_json::Value;

/// Assistant-authored entry in either the OpenAI (`role`) or dict (`type`) shape.
pub fn is_assistant_message(entry: &Value) -> bool {
    let field = |name: &str| entry.get(name).and_then(Value::as_str);
    field("role") == Some("assistant") || field("type") == Some("ai")
}

/// Text of the last assistant entry in `response`, degrading to whatever
/// string can be made of it. Never fails.
pub fn extract_response(response: &Value, is_assistant: impl Fn(&Value) -> bool) -> String {
    if !is_truthy(response) {
        return String::new();
    }
    if let Value::String(text) = response {
        return text.clone();
    }
    let Some(messages) = response.get("messages").and_then(Value::as_array) else {
        return stringify(response);
    };
    if let Some(entry) = messages.iter().rev().find(|entry| is_assistant(*entry)) {
        return content_of(entry).unwrap_or_default();
    }
    match messages.last() {
        Some(last) => content_of(last).unwrap_or_else(|| stringify(last)),
        None => String::new(),
    }
}

/// Answer text of a finished agent transcript.
pub fn extract_state_response(state: &AgentState) -> String {
    serde_json::to_value(state)
        .map(|value| extract_response(&value, is_assistant_message))
        .unwrap_or_default()
}

fn content_of(entry: &Value) -> Option<String> {
    match entry.get("content")? {
        Value::Null => Some(String::new()),
        other => Some(stringify(other)),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
