use super::diagnostics::failed_generation_detail;
use super::errors::AgentError;
use super::prompt::build_prompt;
use super::response::extract_state_response;
use super::runner::{ModelBinding, ReactAgent};
use crate::application::tooling::{ToolBuilder, ToolSet, make_tools};
use crate::config::AppConfig;
use crate::model::{DynamicModelProvider, ModelError, ModelProvider, ProviderErrorKind};
use crate::search::TavilyToolBuilder;
use crate::types::Query;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One question for the agent.
#[derive(Debug, Clone)]
pub struct AgentQuery {
    pub model: String,
    pub query: Query,
    pub allow_search: bool,
    /// Blank means the configured default
    pub system_prompt: String,
}

pub struct AgentOrchestrator<P: ModelProvider> {
    provider: Arc<P>,
    tool_builder: Arc<dyn ToolBuilder>,
    provider_id: String,
    default_system_prompt: String,
    max_steps: usize,
}

impl AgentOrchestrator<DynamicModelProvider> {
    /// Wires the configured providers and the Tavily tool builder.
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let provider = Arc::new(DynamicModelProvider::from_configs(&config.providers)?);
        let tool_builder: Arc<dyn ToolBuilder> =
            Arc::new(TavilyToolBuilder::new(config.search.clone()));
        Ok(Self::new(provider, tool_builder, config))
    }
}

impl<P: ModelProvider> AgentOrchestrator<P> {
    pub fn new(provider: Arc<P>, tool_builder: Arc<dyn ToolBuilder>, config: &AppConfig) -> Self {
        Self {
            provider,
            tool_builder,
            provider_id: config.default_provider.clone(),
            default_system_prompt: config.default_system_prompt.clone(),
            max_steps: config.max_agent_steps,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Answers `query` with the agent, retrying once without tools when the
    /// provider rejects a malformed tool call.
    pub async fn respond(&self, query: AgentQuery) -> Result<String, AgentError> {
        let AgentQuery {
            model,
            query,
            allow_search,
            system_prompt,
        } = query;

        self.provider
            .ensure_available(&self.provider_id, &model)
            .map_err(|err| {
                error!(provider = self.provider_id.as_str(), model = model.as_str(), %err, "Model binding failed");
                AgentError::from(err)
            })?;
        let binding = ModelBinding::new(self.provider_id.clone(), model);

        let tools = make_tools(allow_search, self.tool_builder.as_ref());

        let prompt = match build_prompt(&system_prompt, &self.default_system_prompt) {
            Ok(prompt) => Some(prompt),
            Err(err) => {
                warn!(%err, "Failed to build prompt template; continuing without system prompt");
                None
            }
        };

        let state = query.into_state();
        let agent = ReactAgent::new(
            Arc::clone(&self.provider),
            binding.clone(),
            prompt.clone(),
            tools,
            self.max_steps,
        );

        let outcome = match agent.invoke(state.clone()).await {
            Ok(outcome) => outcome,
            Err(AgentError::Model(err)) if err.kind() == ProviderErrorKind::ToolUseFailed => {
                let detail = failed_generation_detail(&err);
                error!(
                    model = binding.model.as_str(),
                    failed_generation = %detail,
                    "Provider rejected a tool call"
                );
                if agent.tools().is_empty() {
                    return Err(AgentError::Model(err));
                }
                warn!("Retrying agent once without tools");
                let fallback = ReactAgent::new(
                    Arc::clone(&self.provider),
                    binding,
                    prompt,
                    ToolSet::empty(),
                    self.max_steps,
                );
                fallback.invoke(state).await?
            }
            Err(other) => return Err(other),
        };

        let answer = extract_state_response(&outcome);
        info!(chars = answer.len(), "Agent answer extracted");
        Ok(answer)
    }
}
