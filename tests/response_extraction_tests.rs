// Response extraction tests - flattening agent output into a single answer

use askagent_core::agent::{extract_response, extract_state_response, is_assistant_message};
use askagent_core::types::{AgentState, ChatMessage};
use serde_json::{Value, json};

fn extract(value: &Value) -> String {
    extract_response(value, is_assistant_message)
}

#[test]
fn last_assistant_wins_regardless_of_trailing_entries() {
    for trailing in 0..5 {
        let mut messages = vec![
            json!({"role": "user", "content": "q"}),
            json!({"role": "assistant", "content": "early"}),
            json!({"role": "assistant", "content": "final answer"}),
        ];
        for i in 0..trailing {
            messages.push(json!({"role": "tool", "content": format!("tool output {i}")}));
        }
        assert_eq!(extract(&json!({"messages": messages})), "final answer");
    }
}

#[test]
fn documented_examples_hold() {
    assert_eq!(extract(&json!({"messages": []})), "");
    assert_eq!(extract(&json!("hello")), "hello");
    assert_eq!(extract(&Value::Null), "");
}

#[test]
fn malformed_shapes_never_panic() {
    let shapes = [
        json!(42),
        json!(true),
        json!([1, 2, 3]),
        json!({"messages": null}),
        json!({"messages": [null, 7, "text"]}),
        json!({"messages": [{"role": 5, "content": {"nested": true}}]}),
        json!({"data": {"messages": []}}),
    ];
    for shape in &shapes {
        let _ = extract(shape);
    }
    assert_eq!(extract(&json!({"messages": [null, 7, "text"]})), "text");
    assert_eq!(extract(&json!([1, 2, 3])), "[1,2,3]");
}

#[test]
fn langchain_dict_shape_is_recognised() {
    let value = json!({"messages": [
        {"type": "human", "content": "hi"},
        {"type": "ai", "content": "hello from ai"},
        {"type": "tool", "content": "{}"}
    ]});
    assert_eq!(extract(&value), "hello from ai");
}

#[test]
fn transcript_with_tool_round_trip() {
    let mut call = ChatMessage::assistant("");
    call.content = None;
    let state = AgentState::new(vec![
        ChatMessage::system("be brief"),
        ChatMessage::user("weather?"),
        call,
        ChatMessage::tool_result("call_1", "tavily_search", r#"{"answer":"sunny"}"#),
        ChatMessage::assistant("Sunny."),
    ]);
    assert_eq!(extract_state_response(&state), "Sunny.");
}
