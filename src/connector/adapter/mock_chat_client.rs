use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{Completion, CompletionRequest, DomainError, TokenUsage};

const MOCK_MODEL: &str = "mock-llm";

/// Minutes returned when no custom response is configured.
const DEMO_MINUTES: &str = r#"{
  "title": "Demo Meeting",
  "date": null,
  "attendees": ["Alex", "Sam"],
  "topics_discussed": [
    {
      "topic": "Project status",
      "summary": "The team reviewed progress on the current milestone. Work is on track.",
      "decisions": ["Keep the current release date"]
    }
  ],
  "action_items": [
    {"task": "Share the updated plan", "assignee": "Alex", "deadline": null, "priority": "medium"}
  ],
  "next_meeting": null
}"#;

/// Offline [`ChatClient`] that never touches the network.
///
/// Scripted outcomes are consumed first, in order; once the script is empty
/// every call returns the configured response text.
pub struct MockChatClient {
    response: String,
    script: Mutex<VecDeque<Result<Completion, DomainError>>>,
    calls: AtomicUsize,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_response(DEMO_MINUTES)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_script(self, script: Vec<Result<Completion, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..self
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_scripted(&self) -> Option<Result<Completion, DomainError>> {
        match self.script.lock() {
            Ok(mut script) => script.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "MockChatClient call {} ({} prompt chars)",
            call,
            request.prompt().len()
        );

        if let Some(outcome) = self.next_scripted() {
            return outcome;
        }

        let prompt_tokens = (request.prompt().len() / 4) as u32;
        let completion_tokens = (self.response.len() / 4) as u32;
        Ok(Completion::new(self.response.clone())
            .with_usage(TokenUsage::new(prompt_tokens, completion_tokens)))
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_response_is_valid_json() {
        let client = MockChatClient::new();
        let completion = client.complete(&CompletionRequest::new("notes")).await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(completion.text()).unwrap();
        assert_eq!(parsed["title"], "Demo Meeting");
    }

    #[tokio::test]
    async fn test_script_is_consumed_before_response() {
        let client = MockChatClient::with_response("{}").with_script(vec![Err(
            DomainError::rate_limited("429"),
        )]);
        let request = CompletionRequest::new("notes");

        assert!(client.complete(&request).await.is_err());
        assert_eq!(client.complete(&request).await.unwrap().text(), "{}");
        assert_eq!(client.call_count(), 2);
    }
}
