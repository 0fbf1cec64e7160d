//! Provider factory - creates clients from config

use super::clients::OpenAIClient;
use super::traits::ModelClient;
use super::types::ModelError;
use crate::config::ModelProviderConfig;
use std::env;
use tracing::warn;

/// Resolve API key from the environment variable named in config
pub fn resolve_api_key(provider: &str, reference: Option<&str>) -> Option<String> {
    let raw = reference.map(str::trim)?;
    if raw.is_empty() {
        return None;
    }
    match env::var(raw) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            warn!(provider, env_var = raw, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(
                provider,
                env_var = raw,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}

/// Factory for creating model clients from provider config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates a model client based on provider type.
    ///
    /// `groq`, `openai` and `openai-compatible` all map to the chat
    /// completions client; anything else is rejected.
    pub fn create(config: &ModelProviderConfig) -> Result<Box<dyn ModelClient>, ModelError> {
        if config.is_openai_compatible() {
            Ok(Box::new(OpenAIClient::from_config(config)))
        } else {
            Err(ModelError::unsupported_provider_type(
                config.id.clone(),
                config.provider_type.clone(),
            ))
        }
    }
}
