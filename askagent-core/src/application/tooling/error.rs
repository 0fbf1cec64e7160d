use thiserror::Error;

/// Why a tool could not be constructed
#[derive(Debug, Error)]
pub enum ToolBuildError {
    #[error("tool '{tool}' requires an API key (set {env_var})")]
    MissingApiKey { tool: String, env_var: String },
    #[error("tool '{tool}' could not create its HTTP client: {source}")]
    Http {
        tool: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a tool invocation failed
#[derive(Debug, Error)]
pub enum ToolInvokeError {
    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
    #[error("tool '{tool}' transport error: {source}")]
    Transport {
        tool: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("tool '{tool}' returned status {status}: {body}")]
    Status {
        tool: String,
        status: u16,
        body: String,
    },
}
