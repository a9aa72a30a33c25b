use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use tracing::{debug, info};

use super::validation::DEFAULT_MAX_NOTES_LENGTH;
use crate::application::{ChatClient, GenerateMinutesUseCase, ModelGateway, RetryPolicy};
use crate::connector::adapter::{
    AnthropicClient, MockChatClient, OpenAiClient, DEFAULT_ANTHROPIC_BASE_URL,
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
use crate::domain::{DomainError, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_OUTPUT_TOKENS};

/// Per-call timeout for provider HTTP requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const APP_NAME: &str = "Meeting Minutes API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Openai,
    Anthropic,
}

impl Provider {
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Openai => DEFAULT_OPENAI_MODEL,
            Provider::Anthropic => DEFAULT_ANTHROPIC_MODEL,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Openai => DEFAULT_OPENAI_BASE_URL,
            Provider::Anthropic => DEFAULT_ANTHROPIC_BASE_URL,
        }
    }
}

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    /// Falls back to the provider's default model when `None`.
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub max_attempts: u32,
    /// One backoff time unit.
    pub backoff_unit: Duration,
    /// Upper bound on a whole generate request, retries included.
    pub request_timeout: Duration,
    /// Timeout of a single provider call. Kept well below `request_timeout`
    /// so a hung call fails as a retryable connection error.
    pub http_timeout: Duration,
    pub max_input_length: usize,
    pub mock_llm: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Openai,
            api_key: None,
            model: None,
            base_url: None,
            max_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_unit: Duration::from_secs(1),
            request_timeout: Duration::from_secs(120),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            max_input_length: DEFAULT_MAX_NOTES_LENGTH,
            mock_llm: false,
        }
    }
}

/// Builds the gateway and the minutes use case once and hands out shared
/// handles to request handlers.
pub struct Container {
    generate_minutes: Arc<GenerateMinutesUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client = Self::build_chat_client(&config)?;
        Ok(Self::with_chat_client(config, client))
    }

    /// Wire the container around an already constructed client.
    pub fn with_chat_client(config: ContainerConfig, client: Arc<dyn ChatClient>) -> Self {
        let gateway = ModelGateway::new(client)
            .with_retry_policy(RetryPolicy::new(config.backoff_unit))
            .with_max_output_tokens(config.max_tokens)
            .with_max_attempts(config.max_attempts);

        info!("Model gateway initialized with model: {}", gateway.model_name());

        let generate_minutes = Arc::new(GenerateMinutesUseCase::new(Arc::new(gateway)));

        Self {
            generate_minutes,
            config,
        }
    }

    fn build_chat_client(config: &ContainerConfig) -> Result<Arc<dyn ChatClient>> {
        if config.mock_llm {
            debug!("Using mock LLM client");
            return Ok(Arc::new(MockChatClient::new()));
        }

        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "no API key configured for provider {:?}; pass --api-key or set the provider's API key variable",
                    config.provider
                ))
            })?;

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| config.provider.default_model().to_string());
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());

        debug!("Using {:?} provider at {}", config.provider, base_url);

        let client: Arc<dyn ChatClient> = match config.provider {
            Provider::Openai => Arc::new(OpenAiClient::new(
                api_key,
                model,
                base_url,
                config.http_timeout,
            )),
            Provider::Anthropic => Arc::new(AnthropicClient::new(
                api_key,
                model,
                base_url,
                config.http_timeout,
            )),
        };

        Ok(client)
    }

    pub fn generate_minutes_use_case(&self) -> Arc<GenerateMinutesUseCase> {
        Arc::clone(&self.generate_minutes)
    }

    pub fn model_name(&self) -> &str {
        self.generate_minutes.model_name()
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}
