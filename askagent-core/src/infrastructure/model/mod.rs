//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider, ModelClient traits
//! - `factory` - Provider factory for creating clients
//! - `clients` - Client implementations
//! - `provider` - DynamicModelProvider for routing

pub mod clients;
pub mod factory;
pub mod provider;
pub mod traits;
pub mod types;

pub use provider::DynamicModelProvider;
pub use traits::{ModelClient, ModelProvider};
pub use types::{
    ModelError, ModelRequest, ModelResponse, ProviderErrorKind, ToolDefinition,
};
