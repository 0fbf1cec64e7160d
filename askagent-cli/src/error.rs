use askagent_core::agent::AgentError;
use askagent_core::config::ConfigError;
use askagent_core::frontend::FrontendError;
use askagent_core::model::ModelError;
use askagent_core::server::ServerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error(transparent)]
    Frontend(#[from] FrontendError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error("ask mode needs a prompt")]
    EmptyPrompt,
    #[error("model '{0}' is not in allowed_models")]
    ModelNotAllowed(String),
}
