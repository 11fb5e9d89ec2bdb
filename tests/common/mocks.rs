use async_trait::async_trait;
use parley::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

/// Mock LLM client for testing. Clones share the scripted responses and the
/// recorded requests, so a test can keep a handle after boxing the client
/// into a session.
#[derive(Clone)]
pub struct MockLlmClient {
    responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    error: Option<String>,
    busy_flag: Arc<Mutex<Option<Arc<AtomicBool>>>>,
    observed_busy: Arc<Mutex<Vec<bool>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            busy_flag: Arc::new(Mutex::new(None)),
            observed_busy: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_response(&self, response: ChatCompletionResponse) {
        self.responses.lock().unwrap().push(response);
    }

    /// Record the value of the given flag at every completion call.
    pub fn observe_busy(&self, flag: Arc<AtomicBool>) {
        *self.busy_flag.lock().unwrap() = Some(flag);
    }

    pub fn observed_busy(&self) -> Vec<bool> {
        self.observed_busy.lock().unwrap().clone()
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref flag) = *self.busy_flag.lock().unwrap() {
            self.observed_busy
                .lock()
                .unwrap()
                .push(flag.load(Ordering::SeqCst));
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

pub fn create_empty_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "test-model".to_string(),
        choices: vec![],
        usage: None,
    }
}
