mod common;

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use common::mocks::{answer_json, answer_pretty, MockLLMClient};
use serde_json::json;
use std::sync::Arc;
use structured_chat::{api::routes::build_app, AppConfig, AppState, EditPolicy};

// ============= Test Helpers =============

fn create_test_server_with(mock: Arc<MockLLMClient>, config: AppConfig) -> (TestServer, AppState) {
    let state = AppState::new(config, mock);
    let app = build_app(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

fn create_test_server(mock: Arc<MockLLMClient>) -> (TestServer, AppState) {
    create_test_server_with(mock, AppConfig::default())
}

// ============= Health Check Tests =============

#[tokio::test]
async fn test_health_check() {
    let (server, _) = create_test_server(Arc::new(MockLLMClient::new("{}")));

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

// ============= Chat Tests =============

#[tokio::test]
async fn test_chat_returns_answer_as_string() {
    let mock = Arc::new(MockLLMClient::new(&answer_json("A", "B", "C", "S")));
    let (server, state) = create_test_server(mock);

    let response = server
        .post("/chat")
        .json(&json!({ "message": "What is recursion?" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["response"], answer_pretty("A", "B", "C", "S"));
    assert_eq!(state.conversation.len(), 2);
}

#[tokio::test]
async fn test_chat_accepts_non_ascii_message() {
    let mock = Arc::new(MockLLMClient::new(&answer_json("A", "B", "C", "S")));
    let (server, state) = create_test_server(mock);

    server
        .post("/chat")
        .json(&json!({ "message": "¿Qué es la recursión? 再帰とは" }))
        .await
        .assert_status_ok();

    let turns = state.conversation.snapshot();
    assert_eq!(turns[0].content, "¿Qué es la recursión? 再帰とは");
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let mock = Arc::new(MockLLMClient::new(&answer_json("A", "B", "C", "S")));
    let (server, _) = create_test_server(mock.clone());

    let response = server
        .post("/chat")
        .json(&json!({ "message": "   " }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "invalid_input");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_chat_malformed_output_is_bad_gateway() {
    let mock = Arc::new(MockLLMClient::new("no json here"));
    let (server, state) = create_test_server(mock);

    let response = server
        .post("/chat")
        .json(&json!({ "message": "q" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "malformed_model_output");
    assert!(state.conversation.is_empty());
}

#[tokio::test]
async fn test_chat_upstream_failure_is_service_unavailable() {
    let (server, _) = create_test_server(Arc::new(MockLLMClient::failing()));

    let response = server
        .post("/chat")
        .json(&json!({ "message": "q" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "upstream_failure");
    assert!(body["error"].as_str().unwrap().contains("Mock LLM failure"));
}

// ============= Feedback Tests =============

#[tokio::test]
async fn test_chat_then_feedback_flow() {
    let mock = Arc::new(MockLLMClient::scripted(&[
        answer_json("A", "B", "C", "S").as_str(),
        answer_json("A", "B fixed", "C", "S").as_str(),
    ]));
    let (server, state) = create_test_server(mock.clone());

    server
        .post("/chat")
        .json(&json!({ "message": "What is recursion?" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/feedback")
        .json(&json!({ "feedback": "part_b is wrong, fix it" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["response"], answer_pretty("A", "B fixed", "C", "S"));

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("What is recursion?"));
    assert!(prompt.contains("part_b is wrong, fix it"));
    assert_eq!(state.conversation.len(), 4);
}

#[tokio::test]
async fn test_feedback_without_history_records_nothing() {
    let mock = Arc::new(MockLLMClient::new(&answer_json("A", "B", "C", "S")));
    let (server, state) = create_test_server(mock);

    let response = server
        .post("/feedback")
        .json(&json!({ "feedback": "fix it" }))
        .await;

    response.assert_status_ok();
    assert!(state.conversation.is_empty());
}

#[tokio::test]
async fn test_feedback_edit_violation_status() {
    let mock = Arc::new(MockLLMClient::scripted(&[
        answer_json("A", "B", "C", "S").as_str(),
        answer_json("A2", "B2", "C", "S").as_str(),
    ]));
    let mut config = AppConfig::default();
    config.feedback.edit_policy = EditPolicy::Reject;
    let (server, state) = create_test_server_with(mock, config);

    server
        .post("/chat")
        .json(&json!({ "message": "q" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/feedback")
        .json(&json!({ "feedback": "fix part_b" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "edit_violation");
    assert_eq!(state.conversation.len(), 2);
}

#[tokio::test]
async fn test_feedback_requires_field() {
    let mock = Arc::new(MockLLMClient::new("{}"));
    let (server, _) = create_test_server(mock);

    let response = server
        .post("/feedback")
        .json(&json!({ "message": "wrong field" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "invalid_input");
    assert!(body["error"].as_str().unwrap().contains("feedback"));
}

#[tokio::test]
async fn test_chat_unparseable_body_is_invalid_input() {
    let mock = Arc::new(MockLLMClient::new("{}"));
    let (server, state) = create_test_server(mock.clone());

    let response = server
        .post("/chat")
        .content_type("application/json")
        .bytes("{\"message\": ".into())
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "invalid_input");
    assert!(mock.calls().is_empty());
    assert!(state.conversation.is_empty());
}

// ============= Conversation & Docs =============

#[tokio::test]
async fn test_conversation_view_lists_turns() {
    let mock = Arc::new(MockLLMClient::new(&answer_json("A", "B", "C", "S")));
    let (server, _) = create_test_server(mock);

    server
        .post("/chat")
        .json(&json!({ "message": "What is recursion?" }))
        .await
        .assert_status_ok();

    let response = server.get("/conversation").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let turns = body["turns"].as_array().unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0]["role"], "user");
    assert_eq!(turns[0]["content"], "What is recursion?");
    assert_eq!(turns[1]["role"], "assistant");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let (server, _) = create_test_server(Arc::new(MockLLMClient::new("{}")));

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/chat"]["post"].is_object());
    assert!(body["paths"]["/feedback"]["post"].is_object());
    assert!(body["paths"]["/conversation"]["get"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (server, _) = create_test_server(Arc::new(MockLLMClient::new("{}")));

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
