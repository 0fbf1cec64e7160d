use super::errors::AgentError;
use super::prompt::PromptTemplate;
use crate::application::tooling::{ToolInvokeError, ToolSet};
use crate::model::{ModelProvider, ModelRequest};
use crate::types::{AgentState, ChatMessage, ToolCall};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which provider and model an agent talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBinding {
    pub provider: String,
    pub model: String,
}

impl ModelBinding {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// Reason-act loop over the provider's native tool calls.
pub struct ReactAgent<P: ModelProvider> {
    provider: Arc<P>,
    binding: ModelBinding,
    prompt: Option<PromptTemplate>,
    tools: ToolSet,
    max_steps: usize,
}

impl<P: ModelProvider> ReactAgent<P> {
    pub fn new(
        provider: Arc<P>,
        binding: ModelBinding,
        prompt: Option<PromptTemplate>,
        tools: ToolSet,
        max_steps: usize,
    ) -> Self {
        Self {
            provider,
            binding,
            prompt,
            tools,
            max_steps: max_steps.max(1),
        }
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    /// Runs until the model answers without tool calls; returns the full transcript.
    pub async fn invoke(&self, state: AgentState) -> Result<AgentState, AgentError> {
        let mut transcript = state.messages;
        let definitions = self.tools.definitions();
        info!(
            provider = self.binding.provider.as_str(),
            model = self.binding.model.as_str(),
            tools = ?self.tools,
            messages = transcript.len(),
            "Agent run started"
        );

        for turn in 1..=self.max_steps {
            let messages = match &self.prompt {
                Some(prompt) => prompt.format(&transcript),
                None => transcript.clone(),
            };
            debug!(turn, messages = messages.len(), "Submitting agent turn to model provider");

            let response = self
                .provider
                .chat(ModelRequest {
                    provider: self.binding.provider.clone(),
                    model: self.binding.model.clone(),
                    messages,
                    tools: definitions.clone(),
                })
                .await?;

            let reply = response.message;
            let calls = reply.tool_calls.clone();
            transcript.push(reply);

            if calls.is_empty() {
                info!(turn, "Agent returned final response");
                return Ok(AgentState::new(transcript));
            }

            for call in &calls {
                let output = self.execute(call).await;
                transcript.push(ChatMessage::tool_result(
                    call.id.as_str(),
                    call.function.name.as_str(),
                    output,
                ));
            }
        }

        warn!(steps = self.max_steps, "Agent exceeded max model turns");
        Err(AgentError::StepLimit {
            steps: self.max_steps,
        })
    }

    /// Tool output as message text; failures are reported to the model, not raised.
    async fn execute(&self, call: &ToolCall) -> String {
        let name = call.function.name.as_str();
        let Some(tool) = self.tools.find(name) else {
            warn!(tool = name, "Model requested a tool that is not bound");
            return format!("Error: tool '{name}' is not available");
        };

        let result = match parse_arguments(name, &call.function.arguments) {
            Ok(arguments) => {
                info!(tool = name, "Agent requested tool execution");
                tool.invoke(arguments).await
            }
            Err(error) => Err(error),
        };

        match result {
            Ok(Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(error) => {
                warn!(tool = name, %error, "Tool execution failed");
                format!("Error: {error}")
            }
        }
    }
}

fn parse_arguments(tool: &str, raw: &str) -> Result<Value, ToolInvokeError> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(raw).map_err(|err| ToolInvokeError::InvalidArguments {
        tool: tool.to_string(),
        reason: err.to_string(),
    })
}
