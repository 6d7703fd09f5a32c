use crate::cli::Args;
use crate::config::prompt::{ self, PromptConfig };
use crate::error::AssistantError;
use crate::llm::LlmConfig;
use crate::llm::caption::{ CaptionClient, new_client as new_caption_client };
use crate::llm::chat::{ ChatClient, GenerationParams, new_client as new_chat_client };
use crate::models::api::ProductResult;
use crate::search::{ ProductSearch, project_results, new_client as new_search_client };

use image::RgbImage;
use log::{ debug, info, warn };
use std::error::Error;
use std::sync::Arc;

/// Shopping assistant shared by all request handlers.
///
/// Every field is read-only after construction, so clones are handed to
/// concurrent requests without locking.
#[derive(Clone)]
pub struct Assistant {
    chat_client: Arc<dyn ChatClient>,
    caption_client: Arc<dyn CaptionClient>,
    search_client: Arc<dyn ProductSearch>,
    prompt_config: Arc<PromptConfig>,
}

impl Assistant {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        if args.hf_token.is_empty() {
            warn!("HF_TOKEN is not set; text generation and captioning requests will be rejected.");
        }
        if args.serpapi_key.is_empty() {
            warn!("SERPAPI_KEY is not set; product searches will be rejected.");
        }

        let prompt_config = match &args.prompts_path {
            Some(path) => prompt::load_prompts(path)
                .map_err(|e| format!("Failed to load prompts file '{}': {}", path, e))?,
            None => {
                info!("Using built-in prompts");
                Arc::new(PromptConfig::default())
            }
        };

        let chat_config = LlmConfig::new(&args.hf_base_url, &args.hf_token, &args.chat_model);
        let chat_client = new_chat_client(&chat_config);
        info!("Chat client configured: Model={}", chat_client.get_model());

        let caption_config = LlmConfig::new(&args.hf_base_url, &args.hf_token, &args.caption_model);
        let caption_client = new_caption_client(&caption_config);
        info!("Caption client configured: Model={}", caption_client.get_model());

        let search_client = new_search_client(args);
        info!("Search client configured: Engine={}", args.search_engine);

        Ok(Self::with_clients(chat_client, caption_client, search_client, prompt_config))
    }

    pub fn with_clients(
        chat_client: Arc<dyn ChatClient>,
        caption_client: Arc<dyn CaptionClient>,
        search_client: Arc<dyn ProductSearch>,
        prompt_config: Arc<PromptConfig>
    ) -> Self {
        Self { chat_client, caption_client, search_client, prompt_config }
    }

    /// Answers a free-text message in the assistant persona.
    pub async fn chat(&self, message: &str) -> Result<String, AssistantError> {
        let chat_prompt = prompt::get_chat_prompt(&self.prompt_config, message);
        let completion = self.chat_client.generate(&chat_prompt, &GenerationParams::chat()).await?;
        let reply = extract_reply(&completion.response, &self.prompt_config.reply_cue);
        debug!("Chat reply length: {}", reply.len());
        Ok(reply.to_string())
    }

    /// Decides whether a message is about shopping for a product.
    pub async fn classify_intent(&self, message: &str) -> Result<bool, AssistantError> {
        let intent_prompt = prompt::get_intent_prompt(&self.prompt_config, message);
        let completion = self.chat_client
            .generate(&intent_prompt, &GenerationParams::classification()).await?;
        let is_product = is_affirmative(&completion.response, &self.prompt_config.intent_cue);
        debug!("Intent classified: is_product={}", is_product);
        Ok(is_product)
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<ProductResult>, AssistantError> {
        let records = self.search_client.search(query).await?;
        debug!("Search for {:?} returned {} records", query, records.len());
        Ok(project_results(&records))
    }

    /// Captions an uploaded image, then searches for products matching the caption.
    pub async fn image_search(
        &self,
        image_bytes: &[u8]
    ) -> Result<(String, Vec<ProductResult>), AssistantError> {
        let image = decode_rgb(image_bytes)?;
        let caption = self.caption_client.caption(&image).await?;
        info!("Image captioned as {:?}", caption);
        let results = self.search_products(&caption).await?;
        Ok((caption, results))
    }
}

/// Decodes any supported image format into 8-bit RGB.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, AssistantError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Text after the last `cue`, trimmed. Without a cue the whole output is the reply.
pub fn extract_reply<'a>(raw: &'a str, cue: &str) -> &'a str {
    match raw.rfind(cue) {
        Some(idx) => raw[idx + cue.len()..].trim(),
        None => raw.trim(),
    }
}

/// True iff `YES` appears in the upper-cased answer following the last `cue`.
pub fn is_affirmative(raw: &str, cue: &str) -> bool {
    extract_reply(raw, cue).to_uppercase().contains("YES")
}
