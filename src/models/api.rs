use serde::{ Serialize, Deserialize };
use crate::error::AssistantError;

/// Caption reported when an image search fails at any stage.
pub const CAPTION_PLACEHOLDER: &str = "Unable to process image";

#[derive(Clone, Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

/// One shopping result as shown to the frontend. Absent source fields stay `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductResult {
    pub title: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { response: String },
    Error { error: String },
}

impl From<Result<String, AssistantError>> for ChatResponse {
    fn from(result: Result<String, AssistantError>) -> Self {
        match result {
            Ok(response) => ChatResponse::Reply { response },
            Err(e) => ChatResponse::Error { error: e.to_string() },
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Results { results: Vec<ProductResult> },
    Error { error: String },
}

impl From<Result<Vec<ProductResult>, AssistantError>> for SearchResponse {
    fn from(result: Result<Vec<ProductResult>, AssistantError>) -> Self {
        match result {
            Ok(results) => SearchResponse::Results { results },
            Err(e) => SearchResponse::Error { error: e.to_string() },
        }
    }
}

/// Classification fails closed: an error always comes with `is_product: false`.
#[derive(Debug, PartialEq, Serialize)]
pub struct IntentResponse {
    pub is_product: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<bool, AssistantError>> for IntentResponse {
    fn from(result: Result<bool, AssistantError>) -> Self {
        match result {
            Ok(is_product) => IntentResponse { is_product, error: None },
            Err(e) => IntentResponse { is_product: false, error: Some(e.to_string()) },
        }
    }
}

/// Unlike [`SearchResponse`], failures keep `caption` and `results` populated with defaults.
#[derive(Debug, PartialEq, Serialize)]
pub struct ImageSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub caption: String,
    pub results: Vec<ProductResult>,
}

impl From<Result<(String, Vec<ProductResult>), AssistantError>> for ImageSearchResponse {
    fn from(result: Result<(String, Vec<ProductResult>), AssistantError>) -> Self {
        match result {
            Ok((caption, results)) => ImageSearchResponse { error: None, caption, results },
            Err(e) =>
                ImageSearchResponse {
                    error: Some(e.to_string()),
                    caption: CAPTION_PLACEHOLDER.to_string(),
                    results: Vec::new(),
                },
        }
    }
}
