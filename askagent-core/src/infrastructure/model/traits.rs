//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// Trait for model provider implementations
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Checks that `model` on `provider` can be called at all (configured, keyed)
    fn ensure_available(&self, provider: &str, model: &str) -> Result<(), ModelError>;

    /// Send a chat request to the model provider
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}

/// Trait for individual model clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Whether the client has the credentials it needs
    fn is_ready(&self) -> Result<(), ModelError>;

    /// Send a chat request
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
