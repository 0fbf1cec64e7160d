//! # Agent Module
//!
//! Answers one query with a tool-calling agent.
//!
//! ## Flow
//!
//! 1. Bind the configured provider and the requested model
//! 2. Build the search tool when allowed (degrades to no tools)
//! 3. Build the system prompt (degrades to none)
//! 4. Run the [`ReactAgent`] loop until the model answers without tool calls
//! 5. Flatten the transcript into one string with [`extract_response`]
//!
//! A provider `tool_use_failed` rejection is retried exactly once with no tools.

mod diagnostics;
mod errors;
mod orchestrator;
mod prompt;
mod response;
mod runner;


pub use diagnostics::failed_generation_detail;
pub use errors::AgentError;
pub use orchestrator::{AgentOrchestrator, AgentQuery};
pub use prompt::{PromptError, PromptTemplate, build_prompt};
pub use response::{extract_response, extract_state_response, is_assistant_message};
pub use runner::{ModelBinding, ReactAgent};
