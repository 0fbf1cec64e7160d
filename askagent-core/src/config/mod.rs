pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod provider;
pub mod search;
pub mod server;

pub use app::AppConfig;
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, parse_config};
pub use provider::{ModelInfo, ModelProviderConfig};
pub use search::SearchConfig;
pub use server::{BackendConfig, FrontendConfig};
