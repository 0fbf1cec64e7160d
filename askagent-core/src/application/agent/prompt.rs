//! System prompt template.
//!
//! The system text is a template: `{name}` marks a variable and `{{` / `}}`
//! stand for literal braces. The only value ever supplied is the running
//! message sequence, so any variable in the system text is unbound.

use crate::types::ChatMessage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("system prompt references unbound variable '{name}'")]
    UnboundVariable { name: String },
    #[error("system prompt is malformed at byte {position}: {reason}")]
    Malformed { position: usize, reason: &'static str },
}

/// A system message followed by the conversation so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    /// Parses `source`, rejecting variables and unbalanced braces.
    pub fn parse(source: &str) -> Result<Self, PromptError> {
        let mut system = String::with_capacity(source.len());
        let mut chars = source.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|(_, next)| *next == '{').is_some() {
                        system.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(PromptError::Malformed {
                                    position,
                                    reason: "nested '{' inside variable",
                                });
                            }
                            other => name.push(other),
                        }
                    }
                    if !closed {
                        return Err(PromptError::Malformed {
                            position,
                            reason: "unclosed '{'",
                        });
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(PromptError::Malformed {
                            position,
                            reason: "empty variable name",
                        });
                    }
                    return Err(PromptError::UnboundVariable {
                        name: name.to_string(),
                    });
                }
                '}' => {
                    if chars.next_if(|(_, next)| *next == '}').is_some() {
                        system.push('}');
                    } else {
                        return Err(PromptError::Malformed {
                            position,
                            reason: "single '}' without matching '{'",
                        });
                    }
                }
                other => system.push(other),
            }
        }

        Ok(Self { system })
    }

    /// Rendered system text with escapes removed.
    pub fn system_text(&self) -> &str {
        &self.system
    }

    pub fn format(&self, messages: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut rendered = Vec::with_capacity(messages.len() + 1);
        rendered.push(ChatMessage::system(self.system.clone()));
        rendered.extend_from_slice(messages);
        rendered
    }
}

/// Builds the prompt from the caller's system text, or `default` when it is blank.
pub fn build_prompt(system_prompt: &str, default: &str) -> Result<PromptTemplate, PromptError> {
    let source = if system_prompt.trim().is_empty() {
        default
    } else {
        system_prompt
    };
    PromptTemplate::parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn blank_prompt_uses_default() {
        let prompt = build_prompt("   ", "Be brief.").expect("valid");
        assert_eq!(prompt.system_text(), "Be brief.");
    }

    #[test]
    fn doubled_braces_render_literally() {
        let prompt = build_prompt("Reply as {{\"answer\": ...}}", "unused").expect("valid");
        assert_eq!(prompt.system_text(), "Reply as {\"answer\": ...}");
    }

    #[test]
    fn variables_are_unbound() {
        let err = build_prompt("Hello {user}", "unused").unwrap_err();
        assert_eq!(
            err,
            PromptError::UnboundVariable {
                name: "user".to_string()
            }
        );
    }

    #[test]
    fn unbalanced_braces_are_malformed() {
        assert!(matches!(
            build_prompt("JSON like {\"a\": 1", "unused"),
            Err(PromptError::Malformed { .. })
        ));
        assert!(matches!(
            build_prompt("oops }", "unused"),
            Err(PromptError::Malformed { position: 5, .. })
        ));
    }

    #[test]
    fn format_prepends_system_message() {
        let prompt = build_prompt("You are terse.", "unused").expect("valid");
        let messages = prompt.format(&[ChatMessage::user("hi")]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].text(), "You are terse.");
        assert_eq!(messages[1].text(), "hi");
    }
}
