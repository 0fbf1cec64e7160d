//! Dynamic model provider with multiple backends

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use super::factory::ProviderFactory;
use super::traits::{ModelClient, ModelProvider};
use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::ModelProviderConfig;

/// Runtime container for a provider backend
struct ProviderRuntime {
    models: HashSet<String>,
    client: Box<dyn ModelClient>,
}

impl ProviderRuntime {
    fn supports(&self, model: &str) -> bool {
        self.models.is_empty() || self.models.contains(model)
    }
}

/// Dynamic model provider that routes requests to appropriate backends
#[derive(Default)]
pub struct DynamicModelProvider {
    backends: HashMap<String, ProviderRuntime>,
}

impl DynamicModelProvider {
    /// Create provider from config list using factory
    pub fn from_configs(configs: &[ModelProviderConfig]) -> Result<Self, ModelError> {
        let mut provider = Self::default();
        for config in configs {
            let client = ProviderFactory::create(config)?;
            provider.insert(config, client);
        }
        Ok(provider)
    }

    /// Registers a client under the config's id, replacing any previous one
    pub fn insert(&mut self, config: &ModelProviderConfig, client: Box<dyn ModelClient>) {
        let models: HashSet<String> = config.models.iter().map(|m| m.name.clone()).collect();
        self.backends
            .insert(config.id.clone(), ProviderRuntime { models, client });
    }

    fn runtime(&self, provider: &str, model: &str) -> Result<&ProviderRuntime, ModelError> {
        let runtime = self
            .backends
            .get(provider)
            .ok_or_else(|| ModelError::provider_not_found(provider))?;
        if !runtime.supports(model) {
            return Err(ModelError::model_not_found(provider, model));
        }
        Ok(runtime)
    }
}

#[async_trait]
impl ModelProvider for DynamicModelProvider {
    fn ensure_available(&self, provider: &str, model: &str) -> Result<(), ModelError> {
        self.runtime(provider, model)?.client.is_ready()
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let runtime = self.runtime(&request.provider, &request.model)?;
        runtime.client.chat(request).await
    }
}
