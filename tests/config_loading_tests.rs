// Config loading tests - agent.toml parsing, defaults and validation errors

use askagent_core::config::{AppConfig, ConfigError, parse_config};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

const MINIMAL: &str = r#"
default_provider = "groq"
allowed_models = ["llama-3.1-8b-instant"]

[[providers]]
id = "groq"
type = "groq"
endpoint = "https://api.groq.com/openai"
api_key = "GROQ_API_KEY"
"#;

fn parse(content: &str) -> Result<AppConfig, ConfigError> {
    parse_config(content, Path::new("agent.toml"))
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/agent.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_from_disk_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("agent.toml");
    fs::write(&path, MINIMAL).expect("write config");

    let config = AppConfig::load(Some(&path)).expect("valid config");

    assert_eq!(config.default_provider, "groq");
    assert_eq!(config.max_agent_steps, 10);
    assert!(!config.default_system_prompt.trim().is_empty());
    assert_eq!(
        config.backend.bind,
        "127.0.0.1:9999".parse::<SocketAddr>().expect("addr")
    );
    assert_eq!(config.frontend.request_timeout, Duration::from_secs(8));
    assert_eq!(config.frontend.startup_delay, Duration::from_millis(2000));
    assert_eq!(config.search.endpoint, "https://api.tavily.com");
    assert_eq!(config.search.api_key.as_deref(), Some("TAVILY_API_KEY"));
}

#[test]
fn allowed_models_are_registered_on_default_provider() {
    let config = parse(MINIMAL).expect("valid config");
    let groq = &config.providers[0];
    assert!(groq.models.iter().any(|m| m.name == "llama-3.1-8b-instant"));
    assert!(config.is_model_allowed("llama-3.1-8b-instant"));
    assert!(!config.is_model_allowed("gpt-4o"));
}

#[test]
fn returns_error_when_default_provider_missing() {
    let content = MINIMAL.replace("default_provider = \"groq\"", "");
    assert!(matches!(parse(&content), Err(ConfigError::MissingDefaultProvider)));
}

#[test]
fn returns_error_when_default_provider_unknown() {
    let content = MINIMAL.replace("default_provider = \"groq\"", "default_provider = \"openai\"");
    assert!(matches!(parse(&content), Err(ConfigError::ProviderNotFound { .. })));
}

#[test]
fn returns_error_when_allowed_models_empty() {
    let content = MINIMAL.replace(r#"["llama-3.1-8b-instant"]"#, r#"["  "]"#);
    assert!(matches!(parse(&content), Err(ConfigError::NoAllowedModels)));
}

#[test]
fn returns_error_when_no_providers() {
    let content = r#"
default_provider = "groq"
allowed_models = ["m"]
"#;
    assert!(matches!(parse(content), Err(ConfigError::NoProvidersConfigured)));
}

#[test]
fn returns_error_on_invalid_bind() {
    let content = format!("{MINIMAL}\n[backend]\nbind = \"not-an-address\"\n");
    assert!(matches!(
        parse(&content),
        Err(ConfigError::InvalidBind { section: "backend", .. })
    ));
}

#[test]
fn zero_request_timeout_is_rejected() {
    let content = format!("{MINIMAL}\n[frontend]\nrequest_timeout_secs = 0\n");
    assert!(matches!(
        parse(&content),
        Err(ConfigError::ZeroRequestTimeout)
    ));
}

#[test]
fn search_table_ignores_fixed_request_settings() {
    let content = format!(
        "{MINIMAL}\n[search]\nendpoint = \"http://localhost:1\"\nmax_results = 10\nsearch_depth = \"basic\"\n"
    );
    let config = parse(&content).expect("valid config");
    assert_eq!(config.search.endpoint, "http://localhost:1");
}

#[test]
fn blank_system_prompt_falls_back_to_default() {
    let content = format!("default_system_prompt = \"   \"\n{MINIMAL}");
    let config = parse(&content).expect("valid config");
    assert_eq!(
        config.default_system_prompt,
        AppConfig::default().default_system_prompt
    );
}

#[test]
fn returns_parse_error_for_bad_toml() {
    assert!(matches!(parse("default_provider = "), Err(ConfigError::Parse { .. })));
}

#[test]
fn shipped_sample_config_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config/agent.toml");
    let config = AppConfig::load(Some(&path)).expect("sample config parses");
    assert_eq!(config.allowed_models.len(), 2);
    assert_eq!(config.frontend.backend_url, "http://127.0.0.1:9999");
}
