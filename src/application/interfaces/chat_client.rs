use async_trait::async_trait;

use crate::domain::{Completion, CompletionRequest, DomainError};

/// An interface for sending a system instruction and a user prompt to an LLM
/// and receiving the generated text.
///
/// Implementors encapsulate transport, serialization and vendor-specific API
/// details. Failures must be reported using the three-way classification the
/// gateway understands:
///
/// - [`DomainError::RateLimited`] — retried with exponential backoff
/// - [`DomainError::Connection`] — retried with a fixed delay
/// - [`DomainError::ModelApi`] — never retried
///
/// Provider error types must not escape an implementation.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Perform exactly one completion call. Retrying is the gateway's job.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError>;

    /// Identifier of the model this client talks to.
    fn model_name(&self) -> &str;
}
