use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::application::ChatClient;
use crate::domain::{
    CompletionRequest, DomainError, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_OUTPUT_TOKENS,
};

use super::{parse_json_object, RetryPolicy};

/// Single gateway to the completion capability.
///
/// Owns the retry loop and the JSON cleanup of model output. Consumers never
/// see provider error types, only the [`DomainError`] classification:
/// `RateLimited`/`Connection`/`ModelApi` for individual failures plus the
/// terminal `RetriesExhausted` and `MalformedOutput`.
pub struct ModelGateway {
    client: Arc<dyn ChatClient>,
    retry_policy: RetryPolicy,
    max_output_tokens: u32,
    max_attempts: u32,
}

impl ModelGateway {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            retry_policy: RetryPolicy::default(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Attempt cap used by [`Self::complete_as_json`].
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Send one logical completion request, retrying transient failures.
    ///
    /// - rate limited: wait `2^attempt` units, then try again
    /// - connection failure: wait a fixed delay, then try again; the final
    ///   attempt's error is returned as is
    /// - anything else: returned immediately as [`DomainError::ModelApi`]
    ///
    /// When every attempt was rate limited the result is
    /// [`DomainError::RetriesExhausted`].
    pub async fn complete(
        &self,
        prompt: &str,
        system_instruction: &str,
        temperature: f32,
        max_attempts: u32,
    ) -> Result<String, DomainError> {
        let request = CompletionRequest::new(prompt)
            .with_system_instruction(system_instruction)
            .with_temperature(temperature)
            .with_max_output_tokens(self.max_output_tokens)
            .with_max_attempts(max_attempts);

        self.execute(&request).await
    }

    pub async fn execute(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let max_attempts = request.max_attempts();

        for attempt in 0..max_attempts {
            let remaining = max_attempts - attempt - 1;
            info!(
                "Calling model (attempt {}/{}, {} remaining, model={}, temp={})",
                attempt + 1,
                max_attempts,
                remaining,
                self.client.model_name(),
                request.temperature()
            );

            match self.client.complete(request).await {
                Ok(completion) => {
                    if let Some(usage) = completion.usage() {
                        info!(
                            "Model response received: {} prompt tokens, {} completion tokens, {} total tokens",
                            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                        );
                    } else {
                        info!("Model response received (no token usage reported)");
                    }
                    return Ok(completion.into_text());
                }
                Err(DomainError::RateLimited(msg)) => {
                    // The wait is taken after every rate-limited attempt, the last one included.
                    let wait = self.retry_policy.rate_limit_delay(attempt);
                    warn!(
                        "Rate limited by model provider ({}). Waiting {:?} before retry...",
                        msg, wait
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(DomainError::Connection(msg)) => {
                    error!("Connection error: {}", msg);
                    if remaining == 0 {
                        return Err(DomainError::Connection(msg));
                    }
                    tokio::time::sleep(self.retry_policy.connection_delay()).await;
                }
                Err(DomainError::ModelApi(msg)) => {
                    error!("Model API error: {}", msg);
                    return Err(DomainError::ModelApi(msg));
                }
                Err(other) => {
                    error!("Unclassified model failure: {}", other);
                    return Err(DomainError::model_api(other.to_string()));
                }
            }
        }

        Err(DomainError::RetriesExhausted {
            attempts: max_attempts,
        })
    }

    /// [`Self::complete`] followed by fence stripping and one JSON parse.
    ///
    /// Malformed output is not retried here.
    pub async fn complete_as_json(
        &self,
        prompt: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> Result<Map<String, Value>, DomainError> {
        let raw = self
            .complete(prompt, system_instruction, temperature, self.max_attempts)
            .await?;

        parse_json_object(&raw).inspect_err(|e| {
            if let DomainError::MalformedOutput { error, excerpt } = e {
                error!("Failed to parse model response as JSON: {}", error);
                error!("Raw response was: {}", excerpt);
            }
        })
    }
}
