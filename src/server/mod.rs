pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient, session::ChatSession};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/submit", post(handlers::submit))
        .route("/conversation", get(handlers::conversation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One session per process: the conversation lives for the lifetime of
    // the screen being served.
    let client = OpenAiClient::new(config.llm.clone());
    let session = ChatSession::new(Box::new(client));

    let app_state = handlers::AppState {
        session: Arc::new(Mutex::new(session)),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
