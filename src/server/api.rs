use crate::llm::{complete_with_policy, CallPolicy, ChatClient};
use crate::models::chat::{ChatMessage, ChatRequest, ChatResponse, ErrorResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use log::{debug, error, info};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Fixed instruction framing every upstream request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    pub policy: CallPolicy,
}

pub fn router(state: AppState) -> Router {
    // Open CORS matches the baseline; an origin allow-list is a production
    // follow-up tracked in DESIGN.md.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_gateway(
    addr: &str,
    client: Arc<dyn ChatClient>,
    policy: CallPolicy,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting chat gateway on: http://{}", addr);

    let app = router(AppState { client, policy });
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn chat_handler(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let message = match req.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "missing \"message\" field".into(),
                }),
            )
                .into_response();
        }
    };

    if let Some(site) = req.website.as_deref() {
        debug!("chat request while viewing: {}", site);
    }

    let messages = vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(message),
    ];

    match complete_with_policy(state.client.as_ref(), &messages, &state.policy).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply })).into_response(),
        Err(e) => {
            // Full detail stays server-side; the client sees a generic message.
            error!("upstream chat completion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Error calling {} API", state.client.provider_name()),
                }),
            )
                .into_response()
        }
    }
}
