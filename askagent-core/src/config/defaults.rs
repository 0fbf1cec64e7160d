pub const DEFAULT_PROVIDER_ID: &str = "groq";
pub const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_TAVILY_ENDPOINT: &str = "https://api.tavily.com";
pub const DEFAULT_TAVILY_KEY_VAR: &str = "TAVILY_API_KEY";
pub const DEFAULT_BACKEND_BIND: &str = "127.0.0.1:9999";
pub const DEFAULT_FRONTEND_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:9999";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_STARTUP_DELAY_MS: u64 = 2000;
pub const DEFAULT_MAX_AGENT_STEPS: usize = 10;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Answer the user's question accurately and concisely. When search results are available, ground your answer in them.";
