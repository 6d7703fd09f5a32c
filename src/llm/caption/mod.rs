pub mod huggingface;

use async_trait::async_trait;
use image::RgbImage;
use std::sync::Arc;
use super::LlmConfig;
use self::huggingface::BlipCaptionClient;
use crate::error::AssistantError;

/// Turns a decoded image into a short description.
///
/// One instance is built at startup and shared by every request.
#[async_trait]
pub trait CaptionClient: Send + Sync {
    async fn caption(&self, image: &RgbImage) -> Result<String, AssistantError>;

    fn get_model(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Arc<dyn CaptionClient> {
    Arc::new(BlipCaptionClient::from_config(config))
}
