use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::http_errors::{classify_status, classify_transport_error};
use crate::application::ChatClient;
use crate::domain::{Completion, CompletionRequest, DomainError, TokenUsage};

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-haiku-4-5";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const PROVIDER: &str = "AnthropicClient";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ApiUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints such as
/// LM Studio).
///
/// Point it at a local server with `--base-url http://localhost:1234`; the API
/// key may then be any non-empty string.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError> {
        let body = ApiRequest {
            model: &self.model,
            max_tokens: request.max_output_tokens(),
            temperature: request.temperature(),
            system: request.system_instruction(),
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt(),
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(PROVIDER, status, &body));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::model_api(format!("{PROVIDER}: failed to parse response: {e}"))
        })?;

        let text: String = api_response
            .content
            .into_iter()
            .map(|b| b.text)
            .collect::<Vec<_>>()
            .join("");

        let mut completion = Completion::new(text);
        if let Some(usage) = api_response.usage {
            completion =
                completion.with_usage(TokenUsage::new(usage.input_tokens, usage.output_tokens));
        }
        Ok(completion)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
