use super::types::{ConversationResponse, SubmitRequest};
use crate::session::ChatSession;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<ChatSession>>,
}

/// Runs one user turn and returns the updated conversation. A failed
/// dispatch is not an HTTP error: the snapshot simply lacks a new assistant
/// entry.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Json<ConversationResponse> {
    info!("Received submission of {} bytes", request.input.len());

    let mut session = state.session.lock().await;
    let outcome = session.submit(&request.input).await;

    info!("Submission resolved: {:?}", outcome);

    Json(ConversationResponse {
        messages: session.conversation().snapshot().to_vec(),
        busy: session.is_busy(),
    })
}

pub async fn conversation(State(state): State<AppState>) -> Json<ConversationResponse> {
    let session = state.session.lock().await;

    Json(ConversationResponse {
        messages: session.conversation().snapshot().to_vec(),
        busy: session.is_busy(),
    })
}
