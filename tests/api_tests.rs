//! HTTP-level tests for the minutes API.
//!
//! The router runs in-process with a [`MockChatClient`] in place of a real
//! provider, so no network access is needed.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use minutes::{router, Completion, Container, ContainerConfig, DomainError, MockChatClient};

const TRANSCRIPT: &str = "Meeting on Q4 Audit Planning - January 15, 2026. Present: Sarah Chen, \
Jean-Pierre Dubois, Li Wei, Rahul Sharma. Sarah reviewed the Q3 findings: three critical issues in \
the APAC trade reconciliation system. Jean-Pierre will draft a proposal for automated checks by \
January 22nd. Rahul will prepare a risk assessment matrix by end of this week. Next meeting: \
January 22, 2026 at 3pm HKT.";

fn stub_payload() -> Value {
    json!({
        "title": "Q4 Audit Planning",
        "date": "January 15, 2026",
        "attendees": ["Sarah Chen", "Jean-Pierre Dubois", "Li Wei", "Rahul Sharma"],
        "topics_discussed": [
            {
                "topic": "Q3 findings",
                "summary": "Three critical issues were found in APAC reconciliation.",
                "decisions": ["Expand Q4 scope to all five APAC offices"]
            }
        ],
        "action_items": [
            {"task": "Draft automated checks proposal", "assignee": "Jean-Pierre Dubois", "deadline": "January 22", "priority": "high"},
            {"task": "Prepare risk assessment matrix", "assignee": "Rahul Sharma", "deadline": "End of week", "priority": "high"},
            {"task": "Schedule dashboard walkthrough"}
        ],
        "next_meeting": "January 22, 2026 at 3pm HKT"
    })
}

fn test_config() -> ContainerConfig {
    ContainerConfig {
        backoff_unit: Duration::from_millis(1),
        request_timeout: Duration::from_secs(5),
        ..ContainerConfig::default()
    }
}

fn app_with(client: MockChatClient) -> axum::Router {
    let container = Container::with_chat_client(test_config(), Arc::new(client));
    router(Arc::new(container))
}

async fn post_notes(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/generate-minutes")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let app = app_with(MockChatClient::new());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn generates_minutes_preserving_action_item_order() {
    let app = app_with(MockChatClient::with_response(stub_payload().to_string()));

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["minutes"]["action_items"].as_array().unwrap();
    let tasks: Vec<&str> = items.iter().map(|i| i["task"].as_str().unwrap()).collect();
    assert_eq!(
        tasks,
        vec![
            "Draft automated checks proposal",
            "Prepare risk assessment matrix",
            "Schedule dashboard walkthrough"
        ]
    );
    assert_eq!(items[2]["assignee"], "TBD");
    assert_eq!(items[2]["priority"], "medium");
    assert!(items[2]["deadline"].is_null());

    assert_eq!(body["model_used"], "mock-llm");
    assert_eq!(body["input_character_count"], TRANSCRIPT.chars().count());
    assert!(body["processing_time_ms"].as_f64().is_some());
    assert!(body["generated_at"].as_str().is_some());
}

#[tokio::test]
async fn fenced_model_output_is_accepted() {
    let fenced = format!("```json\n{}\n```", stub_payload());
    let app = app_with(MockChatClient::with_response(fenced));

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT, "language": "fr" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["minutes"]["title"], "Q4 Audit Planning");
}

#[tokio::test]
async fn rejects_short_and_long_notes_without_calling_the_model() {
    for notes in ["".to_string(), "Short text".to_string(), "a".repeat(50_001)] {
        let client = Arc::new(MockChatClient::new());
        let container = Container::with_chat_client(test_config(), client.clone());
        let app = router(Arc::new(container));

        let (status, body) = post_notes(app, json!({ "raw_notes": notes })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("raw_notes"));
        assert_eq!(client.call_count(), 0);
    }
}

#[tokio::test]
async fn rejects_missing_field() {
    let app = app_with(MockChatClient::new());

    let (status, body) = post_notes(app, json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn invalid_priority_is_unprocessable() {
    let payload = json!({
        "title": "Sync",
        "action_items": [{"task": "Fix prod", "assignee": "Li Wei", "priority": "urgent"}]
    });
    let app = app_with(MockChatClient::with_response(payload.to_string()));

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("urgent"));
}

#[tokio::test]
async fn malformed_model_output_is_unprocessable() {
    let app = app_with(MockChatClient::with_response("I could not find any minutes, sorry!"));

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("invalid JSON"));
}

#[tokio::test]
async fn rate_limits_are_absorbed_by_retries() {
    let client = Arc::new(
        MockChatClient::with_response(stub_payload().to_string()).with_script(vec![
            Err(DomainError::rate_limited("429")),
            Err(DomainError::rate_limited("429")),
        ]),
    );
    let container = Container::with_chat_client(test_config(), client.clone());

    let (status, _) = post_notes(router(Arc::new(container)), json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn exhausted_retries_hide_internal_detail() {
    let client = MockChatClient::new().with_script(vec![
        Err(DomainError::rate_limited("429 from provider")),
        Err(DomainError::rate_limited("429 from provider")),
        Err(DomainError::rate_limited("429 from provider")),
    ]);
    let app = app_with(client);

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap();
    assert!(!detail.contains("429"));
    assert!(detail.contains("unexpected error"));
}

#[tokio::test]
async fn api_errors_are_server_errors() {
    let client = MockChatClient::new()
        .with_script(vec![Err(DomainError::model_api("400 content policy"))]);
    let app = app_with(client);

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().contains("content policy"));
}

#[tokio::test]
async fn successful_scripted_completion_is_used() {
    let client = MockChatClient::with_response("not used").with_script(vec![Ok(Completion::new(
        stub_payload().to_string(),
    ))]);
    let app = app_with(client);

    let (status, body) = post_notes(app, json!({ "raw_notes": TRANSCRIPT })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["minutes"]["attendees"].as_array().unwrap().len(), 4);
}
