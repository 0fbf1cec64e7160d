//! Turning backend replies into page fragments.

use super::client::BackendReply;
use super::error::FrontendError;
use pulldown_cmark::{Event, Parser, html};

/// Result area of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyView {
    /// Already-rendered HTML
    Answer(String),
    /// Plain text, escaped when placed in the page
    Error(String),
}

/// Markdown to HTML; newlines inside paragraphs become `<br />` and raw
/// HTML from the model is shown as text.
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new(text).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

pub fn render_reply(reply: Result<BackendReply, FrontendError>) -> ReplyView {
    match reply {
        Ok(BackendReply::Answer(answer)) => ReplyView::Answer(render_markdown(&answer)),
        Ok(BackendReply::Status { code, .. }) => {
            ReplyView::Error(format!("Backend Error: {code} - see logs for details"))
        }
        Ok(BackendReply::InvalidJson { .. }) => ReplyView::Error(
            "Backend returned invalid response (non-JSON). See logs for details.".to_string(),
        ),
        Err(err) => ReplyView::Error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_become_line_breaks() {
        let html = render_markdown("line one\nline two");
        assert_eq!(html, "<p>line one<br />\nline two</p>\n");
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn status_errors_mention_code_not_body() {
        let view = render_reply(Ok(BackendReply::Status {
            code: 500,
            body: r#"{"response":"should not show"}"#.to_string(),
        }));
        assert_eq!(
            view,
            ReplyView::Error("Backend Error: 500 - see logs for details".to_string())
        );
    }

    #[test]
    fn invalid_json_is_distinct_from_status() {
        let view = render_reply(Ok(BackendReply::InvalidJson {
            body: "<html>".to_string(),
        }));
        assert!(matches!(view, ReplyView::Error(ref text) if text.contains("non-JSON")));
    }
}
