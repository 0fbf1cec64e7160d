//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/agent.toml";

/// Environment files loaded once at start, in order
pub const ENV_PATHS: [&str; 2] = [".env", "config/.env"];

/// Default chat completions path for OpenAI-compatible providers
pub const DEFAULT_CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Name under which the web search tool is exposed to the model
pub const SEARCH_TOOL_NAME: &str = "tavily_search";

/// Fixed Tavily request settings
pub const SEARCH_MAX_RESULTS: u32 = 3;
pub const SEARCH_DEPTH: &str = "advanced";
pub const SEARCH_INCLUDE_ANSWER: bool = true;
pub const SEARCH_INCLUDE_RAW_CONTENT: bool = false;
