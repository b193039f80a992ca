//! HTTP routes of the chatbot.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use chat_core::{ChatQuery, QueryProcessor};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The chat page served at `/`.
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared between handlers. The processor only reads its catalog.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<QueryProcessor>,
}

impl AppState {
    pub fn new(processor: QueryProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// Reply of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "respuesta")]
    pub reply: String,
}

/// Reply of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub games: usize,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let query = ChatQuery::new(request.message);
    tracing::debug!(id = %query.id, "Bienvenido, ¿en que puedo ayudarle?");

    Json(ChatResponse {
        reply: state.processor.process_query(&query),
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        games: state.processor.catalog().len(),
    })
}

/// Create the chatbot router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
