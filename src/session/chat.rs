use super::dispatch::{FailureKind, dispatch};
use crate::{
    conversation::{Conversation, Message},
    llm::LlmClient,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, info};

/// Outcome of one submit turn. Failures are fully recovered here; the
/// conversation view only ever sees the absence of a new assistant entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming. Nothing appended, no request issued.
    Ignored,
    /// A request was already outstanding; the submission was rejected.
    Busy,
    /// The assistant reply was appended to the conversation.
    Replied,
    /// The request failed or produced no usable reply.
    NoReply(FailureKind),
}

/// Owns the conversation and the in-flight flag for one chat screen.
pub struct ChatSession {
    client: Box<dyn LlmClient>,
    conversation: Conversation,
    busy: Arc<AtomicBool>,
}

impl ChatSession {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self {
            client,
            conversation: Conversation::new(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Shared handle to the in-flight flag. The presentation layer reads it
    /// to drive the disabled state of the submit control.
    pub fn busy_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.busy)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Runs one user turn: append the user message, send the full history to
    /// the completion endpoint, append the reply on success.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        if self.busy.load(Ordering::SeqCst) {
            debug!("Rejecting submission while a request is outstanding");
            return SubmitOutcome::Busy;
        }

        if input.trim().is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        self.conversation.append(Message::user(input));

        self.busy.store(true, Ordering::SeqCst);
        let result = dispatch(self.client.as_ref(), self.conversation.snapshot()).await;
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(reply) => {
                info!("Appending assistant reply ({} bytes)", reply.len());
                self.conversation.append(Message::assistant(reply));
                SubmitOutcome::Replied
            }
            Err(kind) => SubmitOutcome::NoReply(kind),
        }
    }
}
