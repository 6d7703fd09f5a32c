use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use async_trait::async_trait;
use log::debug;
use super::{ ChatClient, CompletionResponse, GenerationParams };
use crate::error::AssistantError;
use crate::llm::{ parse_generated_text, LlmConfig };

#[derive(Debug)]
pub struct HuggingFaceChatClient {
    http: HttpClient,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

impl HuggingFaceChatClient {
    pub fn new(endpoint: String, api_key: Option<String>, model: String) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint,
            api_key: api_key.unwrap_or_default(),
            model,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.endpoint(), config.api_key.clone(), config.model.clone())
    }
}

#[async_trait]
impl ChatClient for HuggingFaceChatClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams
    ) -> Result<CompletionResponse, AssistantError> {
        let req = GenerateRequest { inputs: prompt, parameters: params };
        debug!("Text generation request to {} ({} prompt bytes)", self.model, prompt.len());

        let resp = self.http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send().await?
            .error_for_status()?;
        let data = resp.json::<Value>().await?;

        Ok(CompletionResponse { response: parse_generated_text(&data)? })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}
