use crate::{
    Error,
    conversation::Message,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use async_openai::error::OpenAIError;
use tracing::{debug, error, warn};

/// Internal classification of a failed dispatch. Recorded in the log and the
/// submit outcome; never surfaced to the conversation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response body.
    Transport,
    /// The endpoint answered with an error status or an unreadable body.
    Endpoint,
    /// The response parsed but carried no usable choice.
    EmptyCompletion,
}

impl FailureKind {
    fn classify(error: &Error) -> Self {
        match error {
            Error::OpenAi(OpenAIError::Reqwest(_)) => FailureKind::Transport,
            Error::OpenAi(_) => FailureKind::Endpoint,
            Error::Network(_) => FailureKind::Transport,
            _ => FailureKind::Endpoint,
        }
    }
}

/// Sends the full conversation history to the completion endpoint and takes
/// the first choice's message content as the assistant reply.
pub(crate) async fn dispatch(
    client: &dyn LlmClient,
    history: &[Message],
) -> Result<String, FailureKind> {
    let request = ChatCompletionRequest {
        messages: payload_from(history),
        max_tokens: None,
        temperature: None,
    };

    debug!(
        "Dispatching completion request with {} messages",
        request.messages.len()
    );

    let response = match client.create_chat_completion(request).await {
        Ok(response) => response,
        Err(e) => {
            let kind = FailureKind::classify(&e);
            error!("Completion request failed ({:?}): {}", kind, e);
            return Err(kind);
        }
    };

    match response.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content),
        None => {
            warn!("Completion response carried no choices");
            Err(FailureKind::EmptyCompletion)
        }
    }
}

/// The exact snapshot, serialized as role/content pairs. No truncation,
/// windowing, or summarization.
fn payload_from(history: &[Message]) -> Vec<ChatMessage> {
    history.iter().map(ChatMessage::from).collect()
}
