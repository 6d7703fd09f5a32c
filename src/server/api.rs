use crate::agent::Assistant;
use crate::error::AssistantError;
use crate::models::api::{
    ChatResponse,
    ImageSearchResponse,
    IntentResponse,
    MessageRequest,
    SearchResponse,
};
use std::error::Error;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::{ DefaultBodyLimit, Multipart, State },
};
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, warn, error };

/// Multipart field carrying the uploaded image.
const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
struct AppState {
    assistant: Arc<Assistant>,
}

/// Every route answers 200 with an envelope; failures travel in its `error` field.
pub fn router(assistant: Arc<Assistant>, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/search-products", post(search_products_handler))
        .route("/classify-intent", post(classify_intent_handler))
        .route("/image-search", post(image_search_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(AppState { assistant })
}

pub async fn start_http_server(
    addr: &str,
    assistant: Arc<Assistant>,
    body_limit: usize
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = router(assistant, body_limit);

    let listener = tokio::net::TcpListener
        ::bind(addr).await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
    info!("HTTP API server listening on: http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>
) -> Json<ChatResponse> {
    let result = state.assistant.chat(&req.message).await;
    if let Err(e) = &result {
        error!("Chat failed: {}", e);
    }
    Json(result.into())
}

async fn search_products_handler(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>
) -> Json<SearchResponse> {
    let result = state.assistant.search_products(&req.message).await;
    if let Err(e) = &result {
        error!("Product search failed: {}", e);
    }
    Json(result.into())
}

async fn classify_intent_handler(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>
) -> Json<IntentResponse> {
    let result = state.assistant.classify_intent(&req.message).await;
    if let Err(e) = &result {
        warn!("Intent classification failed, assuming non-shopping intent: {}", e);
    }
    Json(result.into())
}

async fn image_search_handler(
    State(state): State<AppState>,
    mut multipart: Multipart
) -> Json<ImageSearchResponse> {
    let result = match read_upload(&mut multipart).await {
        Ok(bytes) => state.assistant.image_search(&bytes).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        error!("Image search failed: {}", e);
    }
    Json(result.into())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, AssistantError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(field.bytes().await?.to_vec());
        }
    }
    Err(AssistantError::MissingUpload)
}
