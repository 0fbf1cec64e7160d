//! Tavily web search, exposed to the agent as a function tool.

use crate::application::tooling::{Tool, ToolBuildError, ToolBuilder, ToolInvokeError};
use crate::config::SearchConfig;
use crate::constants::{
    SEARCH_DEPTH, SEARCH_INCLUDE_ANSWER, SEARCH_INCLUDE_RAW_CONTENT, SEARCH_MAX_RESULTS,
    SEARCH_TOOL_NAME,
};
use crate::model::ToolDefinition;
use crate::model::factory::resolve_api_key;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TavilySearch {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl TavilySearch {
    pub fn new(config: &SearchConfig, api_key: impl Into<String>) -> Result<Self, ToolBuildError> {
        let http = Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(|source| ToolBuildError::Http {
                tool: SEARCH_TOOL_NAME.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn request<'a>(&'a self, query: &'a str) -> TavilyRequest<'a> {
        TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: SEARCH_MAX_RESULTS,
            search_depth: SEARCH_DEPTH,
            include_answer: SEARCH_INCLUDE_ANSWER,
            include_raw_content: SEARCH_INCLUDE_RAW_CONTENT,
        }
    }
}

#[async_trait]
impl Tool for TavilySearch {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(
            SEARCH_TOOL_NAME,
            "Search the web for current information. Returns a short answer and the top results with URLs.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to look up"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolInvokeError> {
        let query = arguments
            .get("query")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .ok_or_else(|| ToolInvokeError::InvalidArguments {
                tool: SEARCH_TOOL_NAME.to_string(),
                reason: "missing string field 'query'".to_string(),
            })?;

        let url = format!("{}/search", self.endpoint);
        info!(query, max_results = SEARCH_MAX_RESULTS, "Running web search");

        let transport = |source| ToolInvokeError::Transport {
            tool: SEARCH_TOOL_NAME.to_string(),
            source,
        };
        let response = self
            .http
            .post(&url)
            .json(&self.request(query))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolInvokeError::Status {
                tool: SEARCH_TOOL_NAME.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let payload: TavilyResponse = response.json().await.map_err(transport)?;
        debug!(results = payload.results.len(), "Web search completed");
        Ok(payload.into_tool_output())
    }
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: &'static str,
    include_answer: bool,
    include_raw_content: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize, Serialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw_content: Option<String>,
}

impl TavilyResponse {
    fn into_tool_output(self) -> Value {
        json!({
            "query": self.query,
            "answer": self.answer,
            "results": self.results,
        })
    }
}

/// Builds a [`TavilySearch`] from `[search]` config, reading the key from
/// the environment at build time.
#[derive(Debug, Clone)]
pub struct TavilyToolBuilder {
    config: SearchConfig,
}

impl TavilyToolBuilder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl ToolBuilder for TavilyToolBuilder {
    fn build(&self) -> Result<Arc<dyn Tool>, ToolBuildError> {
        let env_var = self.config.api_key.clone().unwrap_or_default();
        let api_key = resolve_api_key(SEARCH_TOOL_NAME, Some(env_var.as_str())).ok_or_else(|| {
            ToolBuildError::MissingApiKey {
                tool: SEARCH_TOOL_NAME.to_string(),
                env_var: env_var.clone(),
            }
        })?;
        Ok(Arc::new(TavilySearch::new(&self.config, api_key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn request_carries_fixed_search_settings() {
        let tool = TavilySearch::new(&SearchConfig::default(), "tvly-test").expect("client");
        let body = serde_json::to_value(tool.request("rust async")).expect("serialize");
        assert_eq!(
            body,
            json!({
                "api_key": "tvly-test",
                "query": "rust async",
                "max_results": 3,
                "search_depth": "advanced",
                "include_answer": true,
                "include_raw_content": false
            })
        );
    }

    #[test]
    fn search_settings_ignore_config_overrides() {
        let config = crate::config::parse_config(
            r#"
default_provider = "groq"
allowed_models = ["llama-3.1-8b-instant"]

[search]
endpoint = "http://localhost:1"
max_results = 10
search_depth = "basic"
include_answer = false
include_raw_content = true

[[providers]]
id = "groq"
type = "groq"
endpoint = "https://api.groq.com/openai"
api_key = "GROQ_API_KEY"
"#,
            std::path::Path::new("agent.toml"),
        )
        .expect("valid config");

        let tool = TavilySearch::new(&config.search, "k").expect("client");
        let body = serde_json::to_value(tool.request("q")).expect("serialize");
        assert_eq!(body["max_results"], 3);
        assert_eq!(body["search_depth"], "advanced");
        assert_eq!(body["include_answer"], true);
        assert_eq!(body["include_raw_content"], false);
        assert_eq!(tool.endpoint, "http://localhost:1");
    }

    #[tokio::test]
    async fn rejects_missing_query_argument() {
        let tool = TavilySearch::new(&SearchConfig::default(), "tvly-test").expect("client");
        let err = tool.invoke(json!({"q": "x"})).await.unwrap_err();
        assert!(matches!(err, ToolInvokeError::InvalidArguments { .. }));
    }

    #[test]
    #[serial]
    fn builder_fails_without_key() {
        let config = SearchConfig {
            api_key: Some("ASKAGENT_TEST_MISSING_TAVILY_KEY".to_string()),
            ..SearchConfig::default()
        };
        unsafe {
            std::env::remove_var("ASKAGENT_TEST_MISSING_TAVILY_KEY");
        }
        let result = TavilyToolBuilder::new(config).build();
        assert!(matches!(result, Err(ToolBuildError::MissingApiKey { .. })));
    }
}
