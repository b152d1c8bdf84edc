//! HTTP boundary: the chat page, the reply endpoint, and a health probe.
//!
//! A panic anywhere below the catch-panic layer turns into a logged 500
//! with a generic reply; one bad request must not take the process down.

use std::sync::Arc;

use axum::{
    extract::State as AxumState,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use bookbot::{BotConfig, ChatEngine, ChatSession};

const SERVER_ERROR_REPLY: &str = "⚠️ Server error, check console.";

#[derive(Debug, Deserialize)]
struct IncomingMessage {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct BotReply {
    response: String,
}

#[derive(Clone)]
struct AppState {
    engine: Arc<ChatEngine>,
    // one shared conversation context for all callers, last write wins
    session: Arc<ChatSession>,
}

async fn chat_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn handle_message(
    AxumState(state): AxumState<AppState>,
    Json(payload): Json<IncomingMessage>,
) -> Json<BotReply> {
    tracing::info!("🟢 Received from frontend: {}", payload.message);

    let response = state.engine.respond(&state.session, &payload.message);

    tracing::info!("🔵 Chatbot response: {}", response);
    Json(BotReply { response })
}

async fn health_check() -> &'static str {
    "Bookbot server is running"
}

fn panic_reply(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("❌ Panic while handling request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(BotReply {
            response: SERVER_ERROR_REPLY.to_string(),
        }),
    )
        .into_response()
}

pub async fn start_server(config: &BotConfig, engine: ChatEngine) -> anyhow::Result<()> {
    let app_state = AppState {
        engine: Arc::new(engine),
        session: Arc::new(ChatSession::new()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(chat_page))
        .route("/get", post(handle_message))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_reply))
        .layer(cors)
        .with_state(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("🚀 Bookbot server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
