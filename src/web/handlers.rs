use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{debug, error, info};
use serde_json::json;

use crate::model;
use crate::web::error::ApiError;
use crate::web::models::{
    AssistantMessage, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ModelInfo,
    ModelList, UsageStats,
};
use crate::AppState;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

// Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().insert_header(ALLOW_ORIGIN).json(json!({
        "message": "Jan Nano 4B Q8 API Server",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": unix_timestamp(),
    }))
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ALLOW_ORIGIN)
        .json(json!({ "status": "healthy" }))
}

pub async fn list_models() -> impl Responder {
    HttpResponse::Ok().insert_header(ALLOW_ORIGIN).json(ModelList {
        object: "list",
        data: vec![ModelInfo {
            id: model::MODEL_ID,
            object: "model",
            created: unix_timestamp(),
            owned_by: model::MODEL_OWNER,
        }],
    })
}

// Chat completion API endpoint
pub async fn chat_completions(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    // The body is collected by the framework; an absent or empty body
    // surfaces here as a JSON parse failure.
    let request: ChatCompletionRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Rejecting chat completion request: {}", e);
        ApiError::MalformedRequest(e.to_string())
    })?;

    info!(
        "Chat completion request: model={}, messages={}, max_tokens={:?}, temperature={:?}",
        request.model,
        request.messages.len(),
        request.max_tokens,
        request.temperature
    );

    let last_message = match request.messages.last() {
        Some(message) => {
            debug!("Last message: role={}, content={}", message.role, message.content);
            message.content.as_str()
        }
        None => "Hello",
    };

    let reply = data.replies.generate(last_message);
    let prompt_tokens = model::word_count(last_message);
    let completion_tokens = model::word_count(&reply);
    let timestamp = unix_timestamp();

    let response = ChatCompletionResponse {
        id: format!("chatcmpl-{}", timestamp),
        object: "chat.completion",
        created: timestamp,
        model: request.model,
        choices: vec![ChatChoice {
            index: 0,
            message: AssistantMessage {
                role: "assistant",
                content: reply,
            },
            finish_reason: "stop",
        }],
        usage: UsageStats::new(prompt_tokens, completion_tokens),
    };

    Ok(HttpResponse::Ok().insert_header(ALLOW_ORIGIN).json(response))
}

// Everything that misses the route table lands here: CORS preflight for
// any path, the JSON not-found envelope for GET, a bare 404 otherwise.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    let method = req.method();
    if method == Method::OPTIONS {
        HttpResponse::Ok()
            .insert_header(ALLOW_ORIGIN)
            .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
            .insert_header(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
            .finish()
    } else if method == Method::GET {
        HttpResponse::Ok()
            .insert_header(ALLOW_ORIGIN)
            .json(json!({ "error": "Not found", "path": req.path() }))
    } else {
        HttpResponse::NotFound().finish()
    }
}
