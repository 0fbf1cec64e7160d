//! Model types - Request, Response, and Error types

use crate::types::ChatMessage;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A function tool offered to the model, in OpenAI wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn function(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Model request for LLM chat
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub provider: String,
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
}

/// Model response from LLM
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: ChatMessage,
}

impl ModelResponse {
    pub fn new(message: ChatMessage) -> Self {
        Self { message }
    }
}

/// What the provider reported about a rejected call, read from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The model produced a tool call the provider could not parse
    ToolUseFailed,
    RateLimited,
    InvalidRequest,
    Authentication,
    Other,
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider '{provider}' is not configured")]
    ProviderNotFound { provider: String },
    #[error("model '{model}' is not available for provider '{provider}'")]
    ModelNotFound { provider: String, model: String },
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("unsupported provider type '{provider_type}' for provider '{provider}'")]
    UnsupportedProviderType {
        provider: String,
        provider_type: String,
    },
    #[error("network error calling provider '{provider}': {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider '{provider}' rejected the request with status {status}: {body}")]
    Api {
        provider: String,
        status: StatusCode,
        body: String,
    },
    #[error("provider '{provider}' returned invalid response: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

impl ModelError {
    pub fn provider_not_found(provider: impl Into<String>) -> Self {
        Self::ProviderNotFound {
            provider: provider.into(),
        }
    }

    pub fn model_not_found(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider: provider.into(),
            model: model.into(),
        }
    }

    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    pub fn unsupported_provider_type(
        provider: impl Into<String>,
        provider_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedProviderType {
            provider: provider.into(),
            provider_type: provider_type.into(),
        }
    }

    pub fn network(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            provider: provider.into(),
            source,
        }
    }

    pub fn api(provider: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Errors caused by how this process is set up rather than by the provider.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ModelError::ProviderNotFound { .. }
                | ModelError::MissingApiKey { .. }
                | ModelError::UnsupportedProviderType { .. }
        )
    }

    /// Parsed JSON payload of a provider rejection, if it had one.
    pub fn payload(&self) -> Option<Value> {
        match self {
            ModelError::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Classifies a rejection by the code/type the provider reported in its payload.
    pub fn kind(&self) -> ProviderErrorKind {
        let ModelError::Api { status, .. } = self else {
            return ProviderErrorKind::Other;
        };
        let payload = self.payload();
        let error = payload.as_ref().and_then(|value| value.get("error"));
        let field = |name: &str| {
            error
                .and_then(|err| err.get(name))
                .and_then(Value::as_str)
                .map(str::to_ascii_lowercase)
        };

        if let Some(kind) = field("code").and_then(|code| classify_label(&code)) {
            return kind;
        }
        if let Some(kind) = field("type").and_then(|kind| classify_label(&kind)) {
            return kind;
        }
        match *status {
            StatusCode::TOO_MANY_REQUESTS => ProviderErrorKind::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderErrorKind::Authentication,
            StatusCode::BAD_REQUEST => ProviderErrorKind::InvalidRequest,
            _ => ProviderErrorKind::Other,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ModelError::ProviderNotFound { provider } => {
                format!("Model provider '{provider}' is not configured.")
            }
            ModelError::ModelNotFound { provider, model } => {
                format!("Model '{model}' is not available on provider '{provider}'.")
            }
            ModelError::MissingApiKey { provider } => {
                format!("Provider '{provider}' requires an API key.")
            }
            ModelError::UnsupportedProviderType {
                provider,
                provider_type,
            } => format!("Provider type '{provider_type}' for '{provider}' is not supported."),
            ModelError::Network { provider, source } => {
                if source.is_connect() {
                    format!("Could not connect to model provider '{provider}'.")
                } else if source.is_timeout() {
                    format!("Request to '{provider}' timed out.")
                } else {
                    format!("Network error talking to '{provider}'.")
                }
            }
            ModelError::Api {
                provider, status, ..
            } => match *status {
                StatusCode::NOT_FOUND => format!("Endpoint of '{provider}' was not found."),
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                    format!("Provider '{provider}' is currently unavailable.")
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    format!("Provider '{provider}' is rate limiting requests.")
                }
                _ => format!("Request to '{provider}' failed: {}", status.as_u16()),
            },
            ModelError::InvalidResponse { provider, .. } => {
                format!("Response from '{provider}' could not be understood.")
            }
        }
    }
}

fn classify_label(label: &str) -> Option<ProviderErrorKind> {
    match label {
        "tool_use_failed" => Some(ProviderErrorKind::ToolUseFailed),
        "rate_limit_exceeded" | "rate_limit_error" | "tokens" => {
            Some(ProviderErrorKind::RateLimited)
        }
        "invalid_api_key" | "authentication_error" => Some(ProviderErrorKind::Authentication),
        "invalid_request_error" => Some(ProviderErrorKind::InvalidRequest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(body: &str) -> ModelError {
        ModelError::api("groq", StatusCode::BAD_REQUEST, body)
    }

    #[test]
    fn classifies_tool_use_failed_from_error_code() {
        let err = rejection(
            r#"{"error":{"message":"Failed to call a function.","type":"invalid_request_error","code":"tool_use_failed","failed_generation":"<function=tavily_search>"}}"#,
        );
        assert_eq!(err.kind(), ProviderErrorKind::ToolUseFailed);
    }

    #[test]
    fn falls_back_to_error_type_then_status() {
        let typed = rejection(r#"{"error":{"message":"bad","type":"invalid_request_error"}}"#);
        assert_eq!(typed.kind(), ProviderErrorKind::InvalidRequest);

        let bare = ModelError::api("groq", StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(bare.kind(), ProviderErrorKind::RateLimited);
    }

    #[test]
    fn non_api_errors_are_unclassified() {
        assert_eq!(
            ModelError::missing_api_key("groq").kind(),
            ProviderErrorKind::Other
        );
        assert!(ModelError::missing_api_key("groq").is_configuration());
        assert!(!rejection("{}").is_configuration());
    }
}
