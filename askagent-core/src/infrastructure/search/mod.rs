//! Web search backends

mod tavily;

pub use tavily::{TavilySearch, TavilyToolBuilder};
