//! Web form that posts queries to the backend and renders the answer.

mod client;
mod error;
mod page;
mod render;
mod server;

pub use client::{BackendClient, BackendReply};
pub use error::FrontendError;
pub use page::{FormState, escape_html, render_page};
pub use render::{ReplyView, render_markdown, render_reply};
pub use server::{AskForm, FrontendState, router, serve};
