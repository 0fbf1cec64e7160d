// Shared stubs for integration tests.
//
// Every external HTTP service (Groq, Tavily, the backend) is replaced by a
// small axum app on an ephemeral port that records the JSON it receives.

#![allow(dead_code)]

use askagent_core::AppConfig;
use askagent_core::config::{ModelInfo, ModelProviderConfig};
use askagent_core::model::DynamicModelProvider;
use askagent_core::model::clients::OpenAIClient;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const MODEL: &str = "llama-3.1-8b-instant";

pub const TOOL_USE_FAILED_BODY: &str = r#"{"error":{"message":"Failed to call a function. Please adjust your prompt. See 'failed_generation' for more details.","type":"invalid_request_error","code":"tool_use_failed","failed_generation":"<function=tavily_search>{\"query\": \"weather\"}</function>"}}"#;

type Responder = dyn Fn(&Value, usize) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
pub struct Stub {
    requests: Arc<Mutex<Vec<Value>>>,
    responder: Arc<Responder>,
}

impl Stub {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("stub lock").clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().expect("stub lock").len()
    }
}

async fn record(State(stub): State<Stub>, body: Bytes) -> Response {
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let index = {
        let mut requests = stub.requests.lock().expect("stub lock");
        requests.push(parsed.clone());
        requests.len() - 1
    };
    let (status, body) = (stub.responder)(&parsed, index);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    addr
}

/// Serves `path` with `responder(request_json, call_index)`.
pub async fn spawn_stub<F>(path: &str, responder: F) -> (String, Stub)
where
    F: Fn(&Value, usize) -> (StatusCode, String) + Send + Sync + 'static,
{
    let stub = Stub {
        requests: Arc::new(Mutex::new(Vec::new())),
        responder: Arc::new(responder),
    };
    let router = Router::new()
        .route(path, post(record))
        .with_state(stub.clone());
    let addr = spawn_router(router).await;
    (format!("http://{addr}"), stub)
}

pub fn completion(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn tool_call_completion(id: &str, name: &str, arguments: Value) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": id,
                    "type": "function",
                    "function": {"name": name, "arguments": arguments.to_string()}
                }]
            },
            "finish_reason": "tool_calls"
        }]
    })
    .to_string()
}

pub fn has_tools(request: &Value) -> bool {
    request
        .get("tools")
        .and_then(Value::as_array)
        .is_some_and(|tools| !tools.is_empty())
}

pub fn groq_config(endpoint: &str) -> ModelProviderConfig {
    ModelProviderConfig {
        id: "groq".to_string(),
        provider_type: "groq".to_string(),
        endpoint: endpoint.to_string(),
        api_key: Some("GROQ_API_KEY".to_string()),
        api_path: None,
        models: vec![ModelInfo {
            name: MODEL.to_string(),
            display_name: None,
        }],
    }
}

pub fn app_config(groq_endpoint: &str) -> AppConfig {
    AppConfig {
        allowed_models: vec![MODEL.to_string()],
        providers: vec![groq_config(groq_endpoint)],
        ..AppConfig::default()
    }
}

/// Provider whose Groq client already holds `api_key`, bypassing the environment.
pub fn provider_with_key(config: &AppConfig, api_key: Option<&str>) -> DynamicModelProvider {
    let mut provider = DynamicModelProvider::default();
    for entry in &config.providers {
        provider.insert(
            entry,
            Box::new(OpenAIClient::new(entry, api_key.map(str::to_string))),
        );
    }
    provider
}
