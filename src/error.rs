use axum::extract::multipart::MultipartError;
use thiserror::Error;

/// Failure of a single assistant operation.
///
/// Every variant ends up as the `error` string of a response envelope; none
/// of them is mapped to an HTTP status code.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Capability(String),

    #[error("{0}")]
    UnexpectedResponse(String),

    #[error("Invalid capability URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to read upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("No file field in upload")]
    MissingUpload,
}

/// Request URLs carry credentials in their query string, so they never reach
/// the error text.
impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::Transport(err.without_url())
    }
}

impl AssistantError {
    pub fn unexpected_model_response() -> Self {
        AssistantError::UnexpectedResponse("Unexpected model response format.".to_string())
    }
}
