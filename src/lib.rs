pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    build_minutes_prompt, coerce_minutes, parse_json_object, strip_code_fences, ChatClient,
    GenerateMinutesUseCase, ModelGateway, RetryPolicy, EXTRACTION_TEMPERATURE,
    MINUTES_SYSTEM_PROMPT,
};

pub use cli::Commands;

pub use connector::{
    router, validate_raw_notes, AnthropicClient, ApiError, Container, ContainerConfig,
    GenerateMinutesRequest, HealthResponse, MinutesWithMetadata, MockChatClient, OpenAiClient,
    Provider,
};

pub use domain::{
    ActionItem, Completion, CompletionRequest, DomainError, MeetingMinutes, Priority,
    TokenUsage, TopicDiscussed,
};
