//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{ChatRequest, ChatResponse, ErrorResponse, ResetResponse, SessionResponse};
use super::AppState;
use crate::runtime::RuntimeStopped;
use crate::starters::{starters, Starters};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/session/stream", get(stream_session))
        .route("/api/session/chat", post(send_chat))
        .route("/api/session/reset", post(reset_session))
        .route("/api/starters", get(get_starters))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session Reads
// ============================================================

async fn get_session(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let snapshot = state.session.snapshot().await?;
    Ok(Json(SessionResponse {
        snapshot,
        model: state.model_id.to_string(),
    }))
}

async fn stream_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // Subscribe first so nothing falls between the snapshot and the stream
    let rx = state.session.subscribe();
    let snapshot = state.session.snapshot().await?;
    Ok(sse_stream(snapshot, rx))
}

// ============================================================
// User Intents
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    state.session.submit(req.text).await;
    Json(ChatResponse { queued: true })
}

async fn reset_session(State(state): State<AppState>) -> Json<ResetResponse> {
    state.session.reset().await;
    Json(ResetResponse { ok: true })
}

// ============================================================
// Static Content
// ============================================================

async fn get_starters() -> Json<Starters> {
    Json(starters())
}

async fn get_version() -> &'static str {
    concat!("advisor-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    Unavailable(String),
}

impl From<RuntimeStopped> for AppError {
    fn from(e: RuntimeStopped) -> Self {
        AppError::Unavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
