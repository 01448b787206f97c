//! Advisor Chat - single-session financial advisory assistant
//!
//! Serves one conversation over HTTP and SSE, backed by an OpenAI-compatible
//! chat-completions endpoint.

mod api;
mod config;
mod directive;
mod llm;
mod runtime;
mod session;
mod starters;
mod state_machine;

use api::{create_router, AppState};
use config::ServerConfig;
use llm::{ChatCompletionsClient, CompletionClient, LlmConfig, LoggingClient};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisor_chat=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let server_config = ServerConfig::from_env()?;
    let llm_config = LlmConfig::from_env()?;

    if llm_config.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; completion requests will be rejected");
    }

    let directive = directive::load_directive(server_config.directive_path.as_deref())?;

    // Start the session
    let client = LoggingClient::new(ChatCompletionsClient::new(llm_config)?);
    let model_id = client.model_id().to_string();
    tracing::info!(model = %model_id, "Completion client initialized");

    let session = runtime::spawn_session(client, directive);
    let state = AppState::new(session, model_id);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], server_config.port));
    tracing::info!("Advisor chat listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
