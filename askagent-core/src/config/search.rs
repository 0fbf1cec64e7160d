use super::defaults::{DEFAULT_TAVILY_ENDPOINT, DEFAULT_TAVILY_KEY_VAR};
use serde::{Deserialize, Serialize};

/// Web search tool settings (`[search]` table).
///
/// Only the endpoint and key are configurable; result count, depth and
/// answer/raw-content flags are fixed by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the Tavily key
    pub api_key: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TAVILY_ENDPOINT.to_string(),
            api_key: Some(DEFAULT_TAVILY_KEY_VAR.to_string()),
        }
    }
}
