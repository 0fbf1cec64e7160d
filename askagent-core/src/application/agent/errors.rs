use crate::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The process is not set up to reach the model at all; retrying cannot help.
    #[error("required dependency '{component}' is unavailable: {reason}")]
    DependencyMissing { component: String, reason: String },
    #[error(transparent)]
    Model(ModelError),
    #[error("agent did not produce a final answer within {steps} model turns")]
    StepLimit { steps: usize },
}

impl From<ModelError> for AgentError {
    fn from(error: ModelError) -> Self {
        if error.is_configuration() {
            let component = match &error {
                ModelError::ProviderNotFound { provider }
                | ModelError::MissingApiKey { provider }
                | ModelError::UnsupportedProviderType { provider, .. } => provider.clone(),
                _ => "model provider".to_string(),
            };
            return AgentError::DependencyMissing {
                component,
                reason: error.to_string(),
            };
        }
        AgentError::Model(error)
    }
}

impl AgentError {
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            AgentError::Model(error) => Some(error),
            _ => None,
        }
    }

    /// True when the provider itself failed (network, rejection, bad payload).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AgentError::Model(
                ModelError::Network { .. }
                    | ModelError::Api { .. }
                    | ModelError::InvalidResponse { .. }
            )
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            AgentError::DependencyMissing { component, reason } => {
                format!("Dependency '{component}' is not available: {reason}")
            }
            AgentError::Model(error) => error.user_message(),
            AgentError::StepLimit { steps } => {
                format!("The agent gave up after {steps} steps without an answer.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn configuration_errors_become_dependency_missing() {
        let error = AgentError::from(ModelError::missing_api_key("groq"));
        assert!(matches!(
            error,
            AgentError::DependencyMissing { ref component, .. } if component == "groq"
        ));
        assert!(!error.is_upstream());
    }

    #[test]
    fn provider_rejections_stay_model_errors() {
        let error = AgentError::from(ModelError::api("groq", StatusCode::BAD_REQUEST, "{}"));
        assert!(error.model_error().is_some());
        assert!(error.is_upstream());
    }
}
