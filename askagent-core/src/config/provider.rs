//! # Provider Configuration
//!
//! Configuration types for hosted chat-completion providers. Groq is the
//! default; any endpoint that speaks the OpenAI chat completions format with
//! function tools works.
//!
//! | Type | Description | API Key Required |
//! |------|-------------|-----------------|
//! | `groq` | Groq Cloud (OpenAI-compatible) | Yes |
//! | `openai` | Other OpenAI-compatible APIs | Yes |

use serde::{Deserialize, Serialize};

/// Information about an available model from a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier used in API calls (e.g., "llama-3.3-70b-versatile")
    pub name: String,
    /// Human-readable label for the model picker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Configuration for a model provider.
///
/// # Example
///
/// ```toml
/// [[providers]]
/// id = "groq"
/// type = "groq"
/// endpoint = "https://api.groq.com/openai"
/// api_key = "GROQ_API_KEY"
/// models = ["llama-3.3-70b-versatile"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelProviderConfig {
    /// Unique identifier for this provider
    pub id: String,
    /// The provider type determines the wire format
    #[serde(rename = "type")]
    pub provider_type: String,
    /// API endpoint base URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Chat completions path override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,
    /// Models served by this provider; empty means "accept any"
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawProviderConfig {
    pub(super) id: String,
    #[serde(rename = "type", default = "default_provider_type")]
    pub(super) provider_type: String,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    #[serde(default)]
    pub(super) models: Vec<RawModelInfo>,
}

fn default_provider_type() -> String {
    "openai".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum RawModelInfo {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        display_name: Option<String>,
    },
}

impl From<RawModelInfo> for ModelInfo {
    fn from(value: RawModelInfo) -> Self {
        match value {
            RawModelInfo::Name(name) => Self {
                name,
                display_name: None,
            },
            RawModelInfo::Detailed { name, display_name } => Self { name, display_name },
        }
    }
}

impl From<RawProviderConfig> for ModelProviderConfig {
    fn from(raw: RawProviderConfig) -> Self {
        Self {
            id: raw.id,
            provider_type: raw.provider_type,
            endpoint: raw.endpoint.unwrap_or_default(),
            api_key: raw.api_key,
            api_path: raw.api_path,
            models: raw.models.into_iter().map(ModelInfo::from).collect(),
        }
    }
}

impl ModelProviderConfig {
    /// Ensure a model exists in this provider's model list
    pub fn ensure_model(&mut self, model: &str) {
        if self.models.iter().all(|info| info.name != model) {
            self.models.push(ModelInfo {
                name: model.to_string(),
                display_name: None,
            });
        }
    }

    /// Whether the provider speaks the OpenAI chat completions format.
    ///
    /// ```
    /// use askagent_core::config::ModelProviderConfig;
    ///
    /// let provider = ModelProviderConfig {
    ///     id: "groq".to_string(),
    ///     provider_type: "GROQ".to_string(),
    ///     endpoint: "https://api.groq.com/openai".to_string(),
    ///     api_key: Some("GROQ_API_KEY".to_string()),
    ///     api_path: None,
    ///     models: vec![],
    /// };
    /// assert!(provider.is_openai_compatible());
    /// ```
    pub fn is_openai_compatible(&self) -> bool {
        matches!(
            self.provider_type.to_ascii_lowercase().as_str(),
            "groq" | "openai" | "openai-compatible"
        )
    }
}
