use super::error::{ToolBuildError, ToolInvokeError};
use crate::model::ToolDefinition;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Something the agent may call during reasoning.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// Schema advertised to the model
    fn definition(&self) -> ToolDefinition;

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolInvokeError>;
}

/// Constructs the search tool on demand, so nothing is built when search is off.
pub trait ToolBuilder: Send + Sync {
    fn build(&self) -> Result<Arc<dyn Tool>, ToolBuildError>;
}
