//! HTTP-level tests of the Gemini adapter, driven through the full pipeline
//! against a stubbed endpoint.

use std::sync::{Arc, Mutex, OnceLock};

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use turingchat::{
    ConversationTurn, DomainError, GeminiClient, LlmChatPipeline, RespondUseCase,
};

/// Serialize env-mutating tests; the process environment is shared.
fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn use_case_for(server: &MockServer) -> RespondUseCase {
    let model = GeminiClient::new("test-key", "gemini-2.5-flash", server.uri(), 0.7);
    let pipeline = Arc::new(LlmChatPipeline::new(Arc::new(model)));
    RespondUseCase::new(pipeline)
}

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[test]
fn building_the_model_fails_without_api_key() {
    let _guard = env_lock().lock().unwrap();
    std::env::remove_var("GEMINI_API_KEY");

    let err = GeminiClient::from_env("gemini-2.5-flash", 0.7).unwrap_err();
    assert!(err.is_config_error());

    // The default pipeline composition surfaces the same configuration
    // error before any network attempt.
    assert!(LlmChatPipeline::from_env().unwrap_err().is_config_error());
}

#[test]
fn built_model_reflects_name_and_temperature() {
    let _guard = env_lock().lock().unwrap();
    std::env::set_var("GEMINI_API_KEY", "test-key");

    let client = GeminiClient::from_env("gemini-1.5-pro", 0.5).unwrap();
    assert_eq!(client.model(), "gemini-1.5-pro");
    assert_eq!(client.temperature(), 0.5);

    assert!(LlmChatPipeline::from_env().is_ok());

    std::env::remove_var("GEMINI_API_KEY");
}

#[tokio::test]
async fn pipeline_returns_candidate_text() {
    let server = MockServer::start().await;

    // The matcher also pins the wire shape: persona as systemInstruction,
    // history with the assistant turn mapped to the "model" role, and the
    // latest input as the final user turn.
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "Hello" }] },
                { "role": "model", "parts": [{ "text": "Hi" }] },
                { "role": "user", "parts": [{ "text": "Test" }] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Good afternoon.")))
        .expect(1)
        .mount(&server)
        .await;

    let use_case = use_case_for(&server);
    let history = vec![
        ConversationTurn::user("Hello"),
        ConversationTurn::assistant("Hi"),
    ];

    let reply = use_case.execute("Test", &history).await.unwrap();
    assert_eq!(reply, "Good afternoon.");
}

#[tokio::test]
async fn request_carries_system_instruction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": turingchat::SYSTEM_PROMPT }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let use_case = use_case_for(&server);
    use_case.execute("X", &[]).await.unwrap();
}

#[tokio::test]
async fn multiple_parts_are_concatenated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [
                    { "text": "Good " },
                    { "text": "morning." }
                ]}
            }]
        })))
        .mount(&server)
        .await;

    let use_case = use_case_for(&server);
    let reply = use_case.execute("X", &[]).await.unwrap();
    assert_eq!(reply, "Good morning.");
}

#[tokio::test]
async fn api_failure_propagates_unmodified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let use_case = use_case_for(&server);
    let err = use_case.execute("X", &[]).await.unwrap_err();

    assert!(err.is_api_error());
}

#[tokio::test]
async fn empty_candidates_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let use_case = use_case_for(&server);
    let err = use_case.execute("X", &[]).await.unwrap_err();

    assert!(matches!(err, DomainError::ParseError(_)));
}
