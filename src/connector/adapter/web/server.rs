use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::RespondUseCase;
use crate::domain::ConversationTurn;

/// The chat widget, embedded so the binary is self-contained.
const CHAT_PAGE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/chat.html"));

#[derive(Clone)]
struct AppState {
    respond: RespondUseCase,
}

/// One exchange request from the widget: the latest user text plus the full
/// prior history the page owns.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

async fn serve_chat_page() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn health() -> &'static str {
    "OK"
}

/// `POST /api/chat`: run one turn and return the reply.
///
/// Pipeline failures are not translated into fallback replies; the widget
/// receives the error text and decides how to present it.
async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let reply = state
        .respond
        .execute(&request.message, &request.history)
        .await
        .map_err(|e| {
            warn!("Chat turn failed: {e}");
            let status = if e.is_config_error() {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, e.to_string())
        })?;

    Ok(Json(ChatResponse { reply }))
}

pub fn app(respond: RespondUseCase) -> Router {
    let state = AppState { respond };

    Router::new()
        .route("/", get(serve_chat_page))
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
}

/// Serve the chat widget until the process is stopped.
pub async fn start_web_server(respond: RespondUseCase, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address {addr}"))?;

    info!("Chat widget listening on http://{addr}");

    axum::serve(listener, app(respond))
        .await
        .context("Web server failed")?;

    Ok(())
}
