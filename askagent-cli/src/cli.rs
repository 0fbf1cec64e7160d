use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    name = "askagent",
    version,
    about = "Chat agent backend and web form backed by Groq and Tavily"
)]
pub struct Cli {
    /// Path to agent.toml (defaults to config/agent.toml)
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::All)]
    pub mode: RunMode,
    /// Overrides `[backend] bind`
    #[arg(long)]
    pub backend_addr: Option<SocketAddr>,
    /// Overrides `[frontend] bind`
    #[arg(long)]
    pub frontend_addr: Option<SocketAddr>,
    /// Model for `ask` mode (defaults to the first allowed model)
    #[arg(long)]
    pub model: Option<String>,
    /// System prompt for `ask` mode
    #[arg(long)]
    pub system: Option<String>,
    /// Let the agent use web search in `ask` mode
    #[arg(long)]
    pub search: bool,
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// `/chat` API only
    Backend,
    /// Web form only, pointed at `[frontend] backend_url`
    Frontend,
    /// Backend in the background, web form in the foreground
    All,
    /// Answer one prompt from the command line and exit
    Ask,
}
