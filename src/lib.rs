pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod search;
pub mod server;

use agent::Assistant;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

fn credential_state(value: &str) -> &'static str {
    if value.is_empty() { "unset" } else { "set" }
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Max Upload Bytes: {}", args.max_upload_bytes);
    info!("Inference Base URL: {}", args.hf_base_url);
    info!("Chat Model: {}", args.chat_model);
    info!("Caption Model: {}", args.caption_model);
    info!("Inference Token: {}", credential_state(&args.hf_token));
    info!("Search Base URL: {}", args.search_base_url);
    info!("Search Engine: {}", args.search_engine);
    info!("Search API Key: {}", credential_state(&args.serpapi_key));
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("built-in"));
    info!("-------------------------");

    let assistant = Arc::new(Assistant::new(&args)?);
    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, assistant, args);
    server.run().await?;

    Ok(())
}
