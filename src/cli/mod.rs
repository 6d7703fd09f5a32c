use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:8000")]
    pub server_addr: String,

    /// Largest accepted request body in bytes (image uploads).
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value = "10485760")]
    pub max_upload_bytes: usize,

    // --- Hosted Inference Args ---
    /// Bearer token for the hosted inference API (text generation and captioning)
    #[arg(long, env = "HF_TOKEN", default_value = "")]
    pub hf_token: String,

    /// Root URL of the hosted inference API; the model id is appended to it
    #[arg(long, env = "HF_BASE_URL", default_value = "https://api-inference.huggingface.co/models")]
    pub hf_base_url: String,

    /// Model id used for chat replies and intent classification
    #[arg(long, env = "CHAT_MODEL", default_value = "mistralai/Mixtral-8x7B-Instruct-v0.1")]
    pub chat_model: String,

    /// Model id used to caption uploaded images
    #[arg(long, env = "CAPTION_MODEL", default_value = "Salesforce/blip-image-captioning-base")]
    pub caption_model: String,

    // --- Shopping Search Args ---
    /// API key for the shopping search service
    #[arg(long, env = "SERPAPI_KEY", default_value = "")]
    pub serpapi_key: String,

    /// Shopping search endpoint
    #[arg(long, env = "SEARCH_BASE_URL", default_value = "https://serpapi.com/search.json")]
    pub search_base_url: String,

    /// Search engine requested from the shopping search service
    #[arg(long, env = "SEARCH_ENGINE", default_value = "google_shopping")]
    pub search_engine: String,

    // --- Prompt Args ---
    /// Optional path to a prompt configuration file. Built-in prompts are used when unset.
    #[arg(long, env = "PROMPTS_PATH")]
    pub prompts_path: Option<String>,
}
