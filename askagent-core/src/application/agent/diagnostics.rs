use crate::model::ModelError;
use serde_json::Value;

/// What the provider said it tried to generate when it rejected a call.
///
/// Prefers `error.failed_generation`, then `error.message`, then the raw body.
/// Null and empty fields are skipped.
pub fn failed_generation_detail(error: &ModelError) -> String {
    let ModelError::Api { body, .. } = error else {
        return error.to_string();
    };
    let detail = error.payload().and_then(|payload| {
        let inner = payload.get("error")?;
        ["failed_generation", "message"]
            .iter()
            .filter_map(|field| inner.get(*field))
            .find_map(|value| match value {
                Value::Null => None,
                Value::String(text) if text.is_empty() => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            })
    });
    detail.unwrap_or_else(|| body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn rejection(body: &str) -> ModelError {
        ModelError::api("groq", StatusCode::BAD_REQUEST, body)
    }

    #[test]
    fn prefers_failed_generation() {
        let err = rejection(
            r#"{"error":{"message":"Failed to call a function.","code":"tool_use_failed","failed_generation":"<function=tavily_search{}>"}}"#,
        );
        assert_eq!(failed_generation_detail(&err), "<function=tavily_search{}>");
    }

    #[test]
    fn falls_back_to_message_then_body() {
        let err = rejection(r#"{"error":{"message":"Failed to call a function."}}"#);
        assert_eq!(failed_generation_detail(&err), "Failed to call a function.");

        let err = rejection("upstream exploded");
        assert_eq!(failed_generation_detail(&err), "upstream exploded");
    }

    #[test]
    fn empty_failed_generation_falls_through_to_message() {
        let err = rejection(
            r#"{"error":{"message":"Failed to call a function.","code":"tool_use_failed","failed_generation":""}}"#,
        );
        assert_eq!(failed_generation_detail(&err), "Failed to call a function.");
    }
}
