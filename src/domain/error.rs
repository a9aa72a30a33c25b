use thiserror::Error;

/// Maximum number of characters of raw model output kept for diagnostics.
pub const MALFORMED_EXCERPT_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The completion capability rejected the call because of rate limiting.
    #[error("Model rate limited: {0}")]
    RateLimited(String),

    /// The completion capability could not be reached.
    #[error("Model connection error: {0}")]
    Connection(String),

    /// Non-retryable failure from the completion capability (bad request,
    /// auth failure, content policy, or anything unclassified).
    #[error("Model API error: {0}")]
    ModelApi(String),

    #[error("All {attempts} completion attempts exhausted")]
    RetriesExhausted { attempts: u32 },

    #[error("AI returned invalid JSON. This can happen occasionally. Please try again. Error: {error}")]
    MalformedOutput { error: String, excerpt: String },

    #[error("Invalid priority '{0}': expected one of high, medium, low")]
    InvalidPriority(String),

    /// A field of the model's JSON has the wrong type (e.g. a number where a
    /// string is expected).
    #[error("Model output failed validation: {0}")]
    InvalidModelOutput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn model_api(msg: impl Into<String>) -> Self {
        Self::ModelApi(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_model_output(msg: impl Into<String>) -> Self {
        Self::InvalidModelOutput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a malformed-output error, keeping only a bounded prefix of the raw text.
    pub fn malformed_output(error: impl std::fmt::Display, raw: &str) -> Self {
        Self::MalformedOutput {
            error: error.to_string(),
            excerpt: raw.chars().take(MALFORMED_EXCERPT_CHARS).collect(),
        }
    }

    /// Whether the gateway may try the same completion again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::Connection(_))
    }

    /// Errors caused by the caller's input or by model output that failed
    /// validation. These surface as 422 at the HTTP boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::MalformedOutput { .. }
                | Self::InvalidPriority(_)
                | Self::InvalidModelOutput(_)
        )
    }
}
