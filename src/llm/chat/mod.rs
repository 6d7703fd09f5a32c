pub mod huggingface;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use super::LlmConfig;
use self::huggingface::HuggingFaceChatClient;
use crate::error::AssistantError;

/// Sampling parameters sent alongside a prompt.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
    pub temperature: f32,
}

impl GenerationParams {
    /// Conversational replies.
    pub fn chat() -> Self {
        Self { max_new_tokens: 200, do_sample: Some(true), temperature: 0.7 }
    }

    /// Near-deterministic YES/NO answers.
    pub fn classification() -> Self {
        Self { max_new_tokens: 3, do_sample: None, temperature: 0.1 }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Returns the raw generated text, prompt echo included.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams
    ) -> Result<CompletionResponse, AssistantError>;

    fn get_model(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Arc<dyn ChatClient> {
    Arc::new(HuggingFaceChatClient::from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classification_params_omit_sampling_flag() {
        let value = serde_json::to_value(GenerationParams::classification()).unwrap();
        assert_eq!(value["max_new_tokens"], json!(3));
        assert!(value.get("do_sample").is_none());
    }

    #[test]
    fn chat_params_enable_sampling() {
        let value = serde_json::to_value(GenerationParams::chat()).unwrap();
        assert_eq!(value["max_new_tokens"], json!(200));
        assert_eq!(value["do_sample"], json!(true));
    }
}
