use crate::agent::AgentOrchestrator;
use crate::config::AppConfig;
use crate::model::{DynamicModelProvider, ModelError, ModelProvider};
use std::sync::Arc;

pub struct ServerState<P: ModelProvider> {
    orchestrator: Arc<AgentOrchestrator<P>>,
    allowed_models: Vec<String>,
}

impl<P: ModelProvider> ServerState<P> {
    pub fn new(orchestrator: Arc<AgentOrchestrator<P>>, allowed_models: Vec<String>) -> Self {
        Self {
            orchestrator,
            allowed_models,
        }
    }

    pub fn orchestrator(&self) -> Arc<AgentOrchestrator<P>> {
        Arc::clone(&self.orchestrator)
    }

    pub fn is_model_allowed(&self, model: &str) -> bool {
        self.allowed_models.iter().any(|allowed| allowed == model)
    }
}

impl ServerState<DynamicModelProvider> {
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let orchestrator = AgentOrchestrator::from_config(config)?;
        Ok(Self::new(
            Arc::new(orchestrator),
            config.allowed_models.clone(),
        ))
    }
}
