use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::http_errors::{classify_status, classify_transport_error};
use crate::application::ChatClient;
use crate::domain::{Completion, CompletionRequest, DomainError, TokenUsage};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const PROVIDER: &str = "OpenAiClient";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// HTTP client for the OpenAI Chat Completions API (and compatible servers).
///
/// Performs exactly one request per [`ChatClient::complete`] call; the
/// [`crate::application::ModelGateway`] decides whether to try again.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
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
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError> {
        let body = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: request.system_instruction(),
                },
                ApiMessage {
                    role: "user",
                    content: request.prompt(),
                },
            ],
            temperature: request.temperature(),
            max_tokens: request.max_output_tokens(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
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

        let text = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::model_api(format!("{PROVIDER}: response had no choices")))?
            .message
            .content
            .unwrap_or_default();

        let mut completion = Completion::new(text);
        if let Some(usage) = api_response.usage {
            completion =
                completion.with_usage(TokenUsage::new(usage.prompt_tokens, usage.completion_tokens));
        }
        Ok(completion)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
