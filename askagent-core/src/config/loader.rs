use super::defaults::{DEFAULT_MAX_AGENT_STEPS, DEFAULT_SYSTEM_PROMPT};
use super::error::ConfigError;
use super::provider::{ModelProviderConfig, RawProviderConfig};
use super::search::SearchConfig;
use super::server::{BackendConfig, FrontendConfig, RawBackend, RawFrontend};
use crate::constants::{CONFIG_PATH, ENV_PATHS};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub default_provider: Option<String>,
    pub default_system_prompt: Option<String>,
    #[serde(default)]
    pub allowed_models: Vec<String>,
    pub max_agent_steps: Option<usize>,
    #[serde(default)]
    pub backend: RawBackend,
    #[serde(default)]
    pub frontend: RawFrontend,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub providers: Vec<RawProviderConfig>,
}

/// Loads `.env` and `config/.env` into the process environment once.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        for path in ENV_PATHS {
            if from_filename(path).is_ok() {
                debug!(path, "Loaded environment file");
            }
        }
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    read_config(config_path)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str, origin: &Path) -> Result<super::AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading agent configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let default_provider = parsed
        .default_provider
        .ok_or(ConfigError::MissingDefaultProvider)?;

    if parsed.providers.is_empty() {
        return Err(ConfigError::NoProvidersConfigured);
    }

    let allowed_models: Vec<String> = parsed
        .allowed_models
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if allowed_models.is_empty() {
        return Err(ConfigError::NoAllowedModels);
    }

    let mut providers: Vec<ModelProviderConfig> = Vec::new();
    for raw_provider in parsed.providers {
        if raw_provider.endpoint.is_none() {
            return Err(ConfigError::MissingEndpoint {
                provider: raw_provider.id.clone(),
            });
        }
        providers.push(ModelProviderConfig::from(raw_provider));
    }
    let Some(provider) = providers.iter_mut().find(|p| p.id == default_provider) else {
        return Err(ConfigError::ProviderNotFound {
            provider: default_provider,
        });
    };
    for model in &allowed_models {
        provider.ensure_model(model);
    }

    let default_system_prompt = parsed
        .default_system_prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

    Ok(super::AppConfig {
        default_provider,
        default_system_prompt,
        allowed_models,
        max_agent_steps: parsed
            .max_agent_steps
            .filter(|steps| *steps > 0)
            .unwrap_or(DEFAULT_MAX_AGENT_STEPS),
        backend: BackendConfig::try_from(parsed.backend)?,
        frontend: FrontendConfig::try_from(parsed.frontend)?,
        search: parsed.search,
        providers,
    })
}
