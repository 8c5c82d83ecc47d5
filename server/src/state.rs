//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! backend keeps no per-user data; the only shared resource is the LLM client.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::llm::types::{ChatOptions, ChatResponse, LlmError, Message};

    /// Scripted LLM: pops one queued reply per call and records what it saw.
    pub struct MockLlm {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<(ChatOptions, Vec<Message>)>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self { replies: Mutex::new(replies.into()), calls: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        #[must_use]
        pub fn failing() -> Self {
            Self::new(vec![Err(LlmError::ApiRequest("connection refused".into()))])
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, options: ChatOptions, messages: &[Message]) -> Result<ChatResponse, LlmError> {
            self.calls.lock().unwrap().push((options, messages.to_vec()));
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("done".into()))?;
            Ok(ChatResponse {
                content: reply,
                model: "mock".into(),
                finish_reason: "stop".into(),
                input_tokens: 0,
                output_tokens: 0,
            })
        }
    }

    /// Create a test `AppState` without an LLM.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm))
    }
}
