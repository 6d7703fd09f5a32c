use async_trait::async_trait;
use image::{ ImageFormat, RgbImage };
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::io::Cursor;
use super::CaptionClient;
use crate::error::AssistantError;
use crate::llm::{ parse_generated_text, LlmConfig };

/// Image-to-text model served by the hosted inference API.
#[derive(Debug)]
pub struct BlipCaptionClient {
    http: HttpClient,
    endpoint: String,
    api_key: String,
    model: String,
}

impl BlipCaptionClient {
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

fn encode_png(image: &RgbImage) -> Result<Vec<u8>, AssistantError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

#[async_trait]
impl CaptionClient for BlipCaptionClient {
    async fn caption(&self, image: &RgbImage) -> Result<String, AssistantError> {
        let body = encode_png(image)?;
        debug!(
            "Caption request to {} ({}x{}, {} bytes)",
            self.model,
            image.width(),
            image.height(),
            body.len()
        );

        let resp = self.http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "image/png")
            .body(body)
            .send().await?
            .error_for_status()?;
        let data = resp.json::<Value>().await?;

        Ok(parse_generated_text(&data)?.trim().to_string())
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trips_dimensions() {
        let image = RgbImage::from_pixel(3, 2, image::Rgb([200, 10, 10]));
        let bytes = encode_png(&image).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
