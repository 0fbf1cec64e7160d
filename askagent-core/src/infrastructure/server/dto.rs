use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One submission from the web form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestChatRequest {
    pub model_name: String,
    /// Blank falls back to the configured default prompt
    #[serde(default)]
    pub system_prompt: String,
    pub messages: Vec<String>,
    #[serde(default)]
    pub allow_search: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
