use super::defaults::{
    DEFAULT_GROQ_ENDPOINT, DEFAULT_MAX_AGENT_STEPS, DEFAULT_PROVIDER_ID, DEFAULT_SYSTEM_PROMPT,
};
use super::error::ConfigError;
use super::provider::{ModelInfo, ModelProviderConfig};
use super::search::SearchConfig;
use super::server::{BackendConfig, FrontendConfig};
use std::path::Path;

/// Application configuration loaded from agent.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_provider: String,
    pub default_system_prompt: String,
    /// Models the web form offers and the backend accepts
    pub allowed_models: Vec<String>,
    pub max_agent_steps: usize,
    pub backend: BackendConfig,
    pub frontend: FrontendConfig,
    pub search: SearchConfig,
    pub providers: Vec<ModelProviderConfig>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn is_model_allowed(&self, model: &str) -> bool {
        self.allowed_models.iter().any(|allowed| allowed == model)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let allowed_models = vec![
            "llama-3.3-70b-versatile".to_string(),
            "llama-3.1-8b-instant".to_string(),
        ];
        Self {
            default_provider: DEFAULT_PROVIDER_ID.to_string(),
            default_system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_agent_steps: DEFAULT_MAX_AGENT_STEPS,
            backend: BackendConfig::default(),
            frontend: FrontendConfig::default(),
            search: SearchConfig::default(),
            providers: vec![ModelProviderConfig {
                id: DEFAULT_PROVIDER_ID.to_string(),
                provider_type: "groq".to_string(),
                endpoint: DEFAULT_GROQ_ENDPOINT.to_string(),
                api_key: Some("GROQ_API_KEY".to_string()),
                api_path: None,
                models: allowed_models
                    .iter()
                    .map(|name| ModelInfo {
                        name: name.clone(),
                        display_name: None,
                    })
                    .collect(),
            }],
            allowed_models,
        }
    }
}
