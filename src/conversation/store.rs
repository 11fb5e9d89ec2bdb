use super::Message;
use tracing::debug;

/// Ordered, append-only holder of every message in the current session.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message to the end of the conversation. Insertion order is
    /// conversation order; there is no reordering or deletion.
    pub fn append(&mut self, message: Message) {
        debug!(
            "Appending {} message to conversation ({} existing)",
            message.role.as_str(),
            self.messages.len()
        );
        self.messages.push(message);
    }

    /// The full ordered sequence. Used verbatim as the payload source for the
    /// next completion request.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
