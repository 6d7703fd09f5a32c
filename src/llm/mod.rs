pub mod caption;
pub mod chat;

use serde_json::Value;
use crate::error::AssistantError;

/// Connection settings for one hosted inference model.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl LlmConfig {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: Some(api_key.to_string()).filter(|k| !k.is_empty()),
            model: model.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

/// Pulls `generated_text` out of a hosted inference response.
///
/// Successful calls answer with `[{"generated_text": "..."}]`; failures the
/// service reports itself come back as `{"error": "..."}`.
pub fn parse_generated_text(value: &Value) -> Result<String, AssistantError> {
    if let Some(text) = value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
    {
        return Ok(text.to_string());
    }

    match value.get("error").and_then(Value::as_str) {
        Some(message) => Err(AssistantError::Capability(message.to_string())),
        None => Err(AssistantError::unexpected_model_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_joins_model_id() {
        let config = LlmConfig::new("https://host/models/", "", "org/model");
        assert_eq!(config.endpoint(), "https://host/models/org/model");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn takes_first_generated_text() {
        let value = json!([{ "generated_text": "one" }, { "generated_text": "two" }]);
        assert_eq!(parse_generated_text(&value).unwrap(), "one");
    }

    #[test]
    fn reported_error_is_forwarded() {
        let value = json!({ "error": "Model is currently loading" });
        let err = parse_generated_text(&value).unwrap_err();
        assert_eq!(err.to_string(), "Model is currently loading");
    }

    #[test]
    fn other_shapes_are_unexpected() {
        for value in [json!([]), json!([{ "text": "x" }]), json!({ "foo": 1 }), json!("text")] {
            let err = parse_generated_text(&value).unwrap_err();
            assert_eq!(err.to_string(), "Unexpected model response format.");
        }
    }
}
