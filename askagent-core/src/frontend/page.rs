//! HTML for the single-page web form.

use super::render::ReplyView;
use std::fmt::Write;

/// Values the form is re-rendered with after a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub system_prompt: String,
    pub model_name: String,
    pub allow_search: bool,
    pub query: String,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_page(models: &[String], form: &FormState, reply: Option<&ReplyView>) -> String {
    let mut options = String::new();
    for model in models {
        let selected = if *model == form.model_name { " selected" } else { "" };
        let model = escape_html(model);
        let _ = write!(options, r#"<option value="{model}"{selected}>{model}</option>"#);
    }

    let result = match reply {
        Some(ReplyView::Answer(html)) => {
            format!(r#"<section class="answer"><h2>Agent response</h2>{html}</section>"#)
        }
        Some(ReplyView::Error(message)) => format!(
            r#"<section class="error" role="alert">{}</section>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    let checked = if form.allow_search { " checked" } else { "" };
    let system_prompt = escape_html(&form.system_prompt);
    let query = escape_html(&form.query);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Chatbot Agents</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
textarea, select {{ width: 100%; }}
.error {{ color: #b00020; }}
</style>
</head>
<body>
<h1>AI Chatbot Agents</h1>
<p>Create and interact with AI agents.</p>
<form method="post" action="/ask">
<label for="system_prompt">Define your AI agent</label>
<textarea id="system_prompt" name="system_prompt" rows="3" placeholder="Type your system prompt here...">{system_prompt}</textarea>
<label for="model_name">Select model</label>
<select id="model_name" name="model_name">{options}</select>
<label><input type="checkbox" name="allow_search" value="on"{checked}> Allow web search</label>
<label for="query">Enter your query</label>
<textarea id="query" name="query" rows="5" placeholder="Ask anything...">{query}</textarea>
<button type="submit">Ask agent</button>
</form>
{result}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_user_text() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn keeps_form_values_and_selection() {
        let models = vec!["llama-a".to_string(), "llama-b".to_string()];
        let form = FormState {
            system_prompt: "Be <terse>".to_string(),
            model_name: "llama-b".to_string(),
            allow_search: true,
            query: "why?".to_string(),
        };
        let page = render_page(&models, &form, None);
        assert!(page.contains(r#"<option value="llama-b" selected>"#));
        assert!(page.contains("Be &lt;terse&gt;"));
        assert!(page.contains(r#"value="on" checked"#));
    }

    #[test]
    fn error_text_is_escaped() {
        let page = render_page(
            &[],
            &FormState::default(),
            Some(&ReplyView::Error("<boom>".to_string())),
        );
        assert!(page.contains("&lt;boom&gt;"));
    }
}
